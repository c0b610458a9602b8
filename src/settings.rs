//! Game settings and tuning
//!
//! Every gameplay constant lives here so a run can be reshaped from a JSON
//! file. Missing fields fall back to the values in [`crate::consts`].

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while reading or writing a settings file
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("brick grid {columns}x{rows} exceeds {max} bricks", max = MAX_BRICKS)]
    BrickGrid { columns: u32, rows: u32 },
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,

    // === Loop ===
    /// Run the simulation on a fixed timestep. When false, one tick per
    /// rendered frame with the raw frame delta.
    pub fixed_timestep: bool,

    // === Arena ===
    pub arena_half_extent: f32,
    pub ball_restart_pos: [f32; 2],

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start_pos: [f32; 2],
    pub ball_start_vel: [f32; 2],

    // === Paddle ===
    pub paddle_start_pos: [f32; 2],
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal speed in units/second
    pub paddle_speed: f32,
    pub paddle_limit: f32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_origin: [f32; 2],
    pub brick_spacing: [f32; 2],
    pub brick_width: f32,
    pub brick_height: f32,

    // === Rules ===
    pub lives: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 800,
            window_title: "Brick Breaker".to_string(),

            fixed_timestep: true,

            arena_half_extent: ARENA_HALF_EXTENT,
            ball_restart_pos: BALL_RESTART_POS,

            ball_radius: BALL_RADIUS,
            ball_start_pos: BALL_START_POS,
            ball_start_vel: BALL_START_VEL,

            paddle_start_pos: PADDLE_START_POS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_limit: PADDLE_LIMIT,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_origin: BRICK_ORIGIN,
            brick_spacing: BRICK_SPACING,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,

            lives: STARTING_LIVES,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the game cannot be built from
    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.brick_columns.checked_mul(self.brick_rows) {
            Some(count) if count <= MAX_BRICKS => Ok(()),
            _ => Err(SettingsError::BrickGrid {
                columns: self.brick_columns,
                rows: self.brick_rows,
            }),
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Total number of bricks in the grid (the win score)
    pub fn brick_count(&self) -> u32 {
        self.brick_columns.saturating_mul(self.brick_rows)
    }

    /// Window aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        if self.window_height == 0 {
            1.0
        } else {
            self.window_width as f32 / self.window_height as f32
        }
    }

    pub fn ball_restart(&self) -> Vec2 {
        Vec2::from(self.ball_restart_pos)
    }
}
