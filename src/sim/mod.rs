//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! the frame loop feeds in held keys and a timestep, and reads back state
//! and events.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Collision, Rect, aabb};
pub use state::{
    Ball, Brick, BrickHealth, GameEvent, GameOutcome, GamePhase, GameState, Paddle, brick_grid,
};
pub use tick::{TickInput, tick};
