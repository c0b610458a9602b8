//! Brick Breaker - a Breakout clone on a flat transform list
//!
//! Core modules:
//! - `sim`: Simulation (AABB collisions, game state, per-tick update)
//! - `game`: Frame loop tying platform, simulation, HUD and renderer together
//! - `renderer`: Rendering backend abstraction and a recording backend
//! - `assets`: Mesh/texture loading and the OBJ parser
//! - `platform`: Windowing/input abstraction and a headless platform
//! - `settings`: Data-driven game tuning

pub mod assets;
pub mod camera;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod transform;

pub use camera::Camera;
pub use game::{Game, RunOutcome};
pub use settings::{Settings, SettingsError};
pub use transform::Transform;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the accumulator will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball bounces off |x| >= 3 and |y| >= 3
    pub const ARENA_HALF_EXTENT: f32 = 3.0;
    /// Where the ball respawns after falling out the bottom
    pub const BALL_RESTART_POS: [f32; 2] = [0.0, 0.0];

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.1;
    pub const BALL_START_POS: [f32; 2] = [-1.0, -0.5];
    pub const BALL_START_VEL: [f32; 2] = [1.0, 1.0];

    /// Paddle defaults
    pub const PADDLE_START_POS: [f32; 2] = [-1.0, -2.0];
    pub const PADDLE_WIDTH: f32 = 1.0;
    pub const PADDLE_HEIGHT: f32 = 0.1;
    pub const PADDLE_SPEED: f32 = 1.5;
    /// Paddle gets nudged back once |x| exceeds this
    pub const PADDLE_LIMIT: f32 = 2.5;

    /// Brick grid
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_ORIGIN: [f32; 2] = [-1.0, 1.0];
    pub const BRICK_SPACING: [f32; 2] = [0.5, 0.3];
    pub const BRICK_WIDTH: f32 = 0.3;
    pub const BRICK_HEIGHT: f32 = 0.1;
    /// Largest grid a settings file may ask for
    pub const MAX_BRICKS: u32 = 4096;

    pub const STARTING_LIVES: u32 = 3;
}
