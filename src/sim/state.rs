//! Game state and core simulation types
//!
//! Every entity is created once at startup and mutated in place. Destroyed
//! bricks stay in the collection and are skipped by collision and rendering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::Settings;

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every brick destroyed
    Win,
    /// Ran out of lives
    Loss,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver(GameOutcome),
}

/// Something that happened during a tick, drained by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball fell out the bottom
    LifeLost { remaining: u32 },
    /// First hit on a healthy brick
    BrickDamaged { index: usize },
    /// Second hit; score already incremented
    BrickDestroyed { index: usize, score: u32 },
    GameOver(GameOutcome),
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Collision box. The radius is used as the full extent on both axes.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.radius, self.radius)
    }

    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Units per second
    pub speed: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Move from held keys. Both held cancel out.
    pub fn steer(&mut self, left: bool, right: bool, dt: f32) {
        if left {
            self.pos.x -= self.speed * dt;
        }
        if right {
            self.pos.x += self.speed * dt;
        }
    }

    /// Nudge back toward the arena once past `limit`
    pub fn clamp(&mut self, limit: f32, dt: f32) {
        if self.pos.x > limit {
            self.pos.x -= self.speed * dt;
        }
        if self.pos.x < -limit {
            self.pos.x += self.speed * dt;
        }
    }
}

/// Brick health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickHealth {
    #[default]
    Healthy,
    Damaged,
    Destroyed,
}

impl BrickHealth {
    /// Health after one more hit. Destroyed stays destroyed.
    pub fn next(self) -> Self {
        match self {
            BrickHealth::Healthy => BrickHealth::Damaged,
            BrickHealth::Damaged | BrickHealth::Destroyed => BrickHealth::Destroyed,
        }
    }
}

/// A brick record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: BrickHealth,
}

impl Brick {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            width,
            height,
            health: BrickHealth::Healthy,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health != BrickHealth::Destroyed
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Apply a hit. Returns the new health; a no-op once destroyed.
    pub fn hit(&mut self) -> BrickHealth {
        self.health = self.health.next();
        self.health
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major: index = column * rows + row
    pub bricks: Vec<Brick>,
    /// Ball bounds (|x|, |y|)
    pub arena_half_extent: f32,
    pub ball_restart: Vec2,
    pub paddle_limit: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events recorded since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let paddle = Paddle {
            pos: Vec2::from(settings.paddle_start_pos),
            width: settings.paddle_width,
            height: settings.paddle_height,
            speed: settings.paddle_speed,
        };
        let ball = Ball::new(
            Vec2::from(settings.ball_start_pos),
            Vec2::from(settings.ball_start_vel),
            settings.ball_radius,
        );

        Self {
            phase: GamePhase::Running,
            lives: settings.lives,
            score: 0,
            ball,
            paddle,
            bricks: brick_grid(settings),
            arena_half_extent: settings.arena_half_extent,
            ball_restart: settings.ball_restart(),
            paddle_limit: settings.paddle_limit,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Bricks needed for a win
    pub fn brick_count(&self) -> u32 {
        self.bricks.len() as u32
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Lay out the brick grid
pub fn brick_grid(settings: &Settings) -> Vec<Brick> {
    let origin = Vec2::from(settings.brick_origin);
    let spacing = Vec2::from(settings.brick_spacing);
    let mut bricks = Vec::with_capacity(settings.brick_count() as usize);
    for column in 0..settings.brick_columns {
        for row in 0..settings.brick_rows {
            let pos = origin + Vec2::new(column as f32 * spacing.x, row as f32 * spacing.y);
            bricks.push(Brick::new(pos, settings.brick_width, settings.brick_height));
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_settings() {
        let state = GameState::new(&Settings::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.brick_count(), 25);
        assert_eq!(state.ball.pos, Vec2::new(-1.0, -0.5));
        assert_eq!(state.ball.vel, Vec2::new(1.0, 1.0));
        assert_eq!(state.paddle.pos, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_brick_grid_layout() {
        let bricks = brick_grid(&Settings::default());
        assert_eq!(bricks[0].pos, Vec2::new(-1.0, 1.0));
        // Index 1 is the next row up in the first column
        assert!((bricks[1].pos - Vec2::new(-1.0, 1.3)).length() < 1e-6);
        // Index 5 starts the second column
        assert!((bricks[5].pos - Vec2::new(-0.5, 1.0)).length() < 1e-6);
        assert!((bricks[24].pos - Vec2::new(1.0, 2.2)).length() < 1e-6);
        assert!(bricks.iter().all(|b| b.width == 0.3 && b.height == 0.1));
    }

    #[test]
    fn test_brick_health_sequence() {
        let mut brick = Brick::new(Vec2::ZERO, 0.3, 0.1);
        assert_eq!(brick.health, BrickHealth::Healthy);
        assert_eq!(brick.hit(), BrickHealth::Damaged);
        assert!(brick.is_alive());
        assert_eq!(brick.hit(), BrickHealth::Destroyed);
        assert!(!brick.is_alive());
        assert_eq!(brick.health, BrickHealth::Destroyed);
        // Further hits are no-ops
        assert_eq!(brick.hit(), BrickHealth::Destroyed);
    }

    #[test]
    fn test_paddle_steer_and_clamp() {
        let mut paddle = GameState::new(&Settings::default()).paddle;
        paddle.steer(true, false, 1.0);
        assert_eq!(paddle.pos.x, -2.5);
        paddle.steer(true, true, 1.0);
        assert_eq!(paddle.pos.x, -2.5);

        paddle.pos.x = -2.6;
        paddle.clamp(2.5, 0.1);
        assert!((paddle.pos.x + 2.45).abs() < 1e-6);

        paddle.pos.x = 2.6;
        paddle.clamp(2.5, 0.1);
        assert!((paddle.pos.x - 2.45).abs() < 1e-6);

        // Inside the limit nothing moves
        paddle.pos.x = 0.3;
        paddle.clamp(2.5, 0.1);
        assert_eq!(paddle.pos.x, 0.3);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(&Settings::default());
        state.push_event(GameEvent::LifeLost { remaining: 2 });
        assert_eq!(state.drain_events(), vec![GameEvent::LifeLost { remaining: 2 }]);
        assert!(state.drain_events().is_empty());
    }
}
