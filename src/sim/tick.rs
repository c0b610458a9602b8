//! Simulation tick
//!
//! One call advances the game by `dt`: terminal checks, boundary bounces,
//! ball integration, paddle steering, then paddle and brick collisions. The
//! order is part of the game's feel and must not be shuffled.

use super::collision::Collision;
use super::state::{BrickHealth, GameEvent, GameOutcome, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Autopilot - paddle follows the ball
    pub autopilot: bool,
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        return;
    }

    if check_game_over(state) {
        return;
    }

    state.time_ticks += 1;

    bounce_off_bounds(state);
    state.ball.integrate(dt);

    let (left, right) = if input.autopilot {
        autopilot_keys(state)
    } else {
        (input.left, input.right)
    };
    state.paddle.steer(left, right, dt);
    state.paddle.clamp(state.paddle_limit, dt);

    match state.ball.rect().collide(&state.paddle.rect()) {
        Collision::Top => state.ball.bounce_vertical(),
        Collision::Side => state.ball.bounce_horizontal(),
        Collision::None => {}
    }

    collide_bricks(state);
}

/// Lives out or all bricks down ends the run
fn check_game_over(state: &mut GameState) -> bool {
    let outcome = if state.lives == 0 {
        GameOutcome::Loss
    } else if state.score >= state.brick_count() {
        GameOutcome::Win
    } else {
        return false;
    };

    log::info!(
        "Game over: {:?} (score {}, lives {})",
        outcome,
        state.score,
        state.lives
    );
    state.phase = GamePhase::GameOver(outcome);
    state.push_event(GameEvent::GameOver(outcome));
    true
}

/// Reflect off the four walls. Falling out the bottom costs a life and
/// respawns the ball at the restart point.
fn bounce_off_bounds(state: &mut GameState) {
    let bound = state.arena_half_extent;
    let ball = &mut state.ball;

    if ball.pos.x >= bound {
        ball.bounce_horizontal();
    }
    if ball.pos.x <= -bound {
        ball.bounce_horizontal();
    }
    if ball.pos.y >= bound {
        ball.bounce_vertical();
    }
    if ball.pos.y <= -bound {
        ball.bounce_vertical();
        ball.pos = state.ball_restart;
        state.lives = state.lives.saturating_sub(1);
        log::info!("Life lost, {} remaining", state.lives);
        state.push_event(GameEvent::LifeLost {
            remaining: state.lives,
        });
    }
}

/// Bounce off every live brick the ball overlaps and advance its health
fn collide_bricks(state: &mut GameState) {
    let ball_rect = state.ball.rect();

    for index in 0..state.bricks.len() {
        let brick = &mut state.bricks[index];
        if !brick.is_alive() {
            continue;
        }

        match ball_rect.collide(&brick.rect()) {
            Collision::None => continue,
            Collision::Top => state.ball.bounce_vertical(),
            Collision::Side => state.ball.bounce_horizontal(),
        }

        match brick.hit() {
            BrickHealth::Damaged => {
                log::debug!("Brick {} damaged", index);
                state.push_event(GameEvent::BrickDamaged { index });
            }
            BrickHealth::Destroyed => {
                state.score += 1;
                log::debug!("Brick {} destroyed, score {}", index, state.score);
                state.push_event(GameEvent::BrickDestroyed {
                    index,
                    score: state.score,
                });
            }
            BrickHealth::Healthy => {}
        }
    }
}

/// Hold left/right to keep the paddle under the ball
fn autopilot_keys(state: &GameState) -> (bool, bool) {
    let dead_zone = state.paddle.width * 0.1;
    let dx = state.ball.pos.x - state.paddle.pos.x;
    (dx < -dead_zone, dx > dead_zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(&Settings::default())
    }

    /// Park the paddle and ball somewhere nothing can be hit
    fn clear_field(state: &mut GameState) {
        state.paddle.pos = Vec2::new(2.0, -2.5);
        state.ball.pos = Vec2::new(-2.0, 0.0);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut state = new_state();
        clear_field(&mut state);
        state.ball.vel = Vec2::new(1.0, -0.5);
        tick(&mut state, &TickInput::default(), 0.1);
        assert!((state.ball.pos - Vec2::new(-1.9, -0.05)).length() < 1e-5);
    }

    #[test]
    fn test_bottom_boundary_costs_a_life() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(0.7, -3.0);
        state.ball.vel = Vec2::new(1.0, -1.0);
        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.lives, 2);
        assert_eq!(state.ball.vel, Vec2::new(1.0, 1.0));
        // Reset to the restart point, then integrated one step
        assert!((state.ball.pos - Vec2::new(SIM_DT, SIM_DT)).length() < 1e-6);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LifeLost { remaining: 2 }]
        );
    }

    #[test]
    fn test_side_and_top_walls_bounce() {
        let mut state = new_state();
        clear_field(&mut state);
        state.ball.pos = Vec2::new(3.0, 0.0);
        state.ball.vel = Vec2::new(1.0, 1.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.vel, Vec2::new(-1.0, 1.0));

        state.ball.pos = Vec2::new(-3.0, 3.0);
        state.ball.vel = Vec2::new(-1.0, 1.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.vel, Vec2::new(1.0, -1.0));
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_loss_when_lives_run_out() {
        let mut state = new_state();
        state.lives = 1;
        state.ball.pos = Vec2::new(0.0, -3.1);
        state.ball.vel = Vec2::new(0.0, -1.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Running);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver(GameOutcome::Loss));
        assert!(state
            .drain_events()
            .contains(&GameEvent::GameOver(GameOutcome::Loss)));

        // Frozen once over
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_win_when_score_reaches_brick_count() {
        let mut state = new_state();
        state.score = state.brick_count();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver(GameOutcome::Win));
    }

    #[test]
    fn test_paddle_top_hit_bounces_up() {
        let mut state = new_state();
        state.paddle.pos = Vec2::new(0.0, -2.0);
        state.ball.pos = Vec2::new(0.1, -1.92);
        state.ball.vel = Vec2::new(1.0, -1.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_paddle_side_hit_bounces_sideways() {
        let mut state = new_state();
        state.paddle.pos = Vec2::new(0.0, -2.0);
        state.ball.pos = Vec2::new(-0.54, -2.0);
        state.ball.vel = Vec2::new(1.0, 0.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.vel, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_paddle_follows_keys_and_stays_in_bounds() {
        let mut state = new_state();
        clear_field(&mut state);
        state.paddle.pos.x = 0.0;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, 0.1);
        assert!((state.paddle.pos.x - 0.15).abs() < 1e-6);

        // Holding right past the limit gets nudged back the same step
        state.paddle.pos.x = 2.5;
        tick(&mut state, &right, 0.1);
        assert!((state.paddle.pos.x - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_brick_takes_two_hits_and_scores_once() {
        let mut state = new_state();
        clear_field(&mut state);
        let target = state.bricks[0].pos;

        // First hit from below: damaged, no score
        state.ball.pos = target - Vec2::new(0.0, 0.09);
        state.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.bricks[0].health, BrickHealth::Damaged);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.vel, Vec2::new(0.0, -1.0));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::BrickDamaged { index: 0 }]
        );

        // Second hit: destroyed, score increments
        state.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.bricks[0].health, BrickHealth::Destroyed);
        assert_eq!(state.score, 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::BrickDestroyed { index: 0, score: 1 }]
        );

        // Destroyed bricks are inert
        state.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 1.0));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_brick_side_hit_bounces_horizontally() {
        let mut state = new_state();
        clear_field(&mut state);
        let target = state.bricks[12].pos;
        state.ball.pos = target - Vec2::new(0.19, 0.0);
        state.ball.vel = Vec2::new(1.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.ball.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(state.bricks[12].health, BrickHealth::Damaged);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut state = new_state();
        state.paddle.pos.x = 0.0;
        state.ball.pos = Vec2::new(1.0, 0.0);
        state.ball.vel = Vec2::ZERO;
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        assert!(state.paddle.pos.x > 0.0);

        state.ball.pos.x = -1.0;
        let before = state.paddle.pos.x;
        tick(&mut state, &input, 0.1);
        assert!(state.paddle.pos.x < before);
    }

    #[test]
    fn test_autopilot_clears_a_level() {
        let mut state = new_state();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..(120 * 60 * 10) {
            tick(&mut state, &input, SIM_DT);
            if state.is_over() {
                break;
            }
        }
        // Every destroyed brick scored exactly once
        let destroyed = state.bricks.iter().filter(|b| !b.is_alive()).count() as u32;
        assert_eq!(state.score, destroyed);
        assert_eq!(state.phase, GamePhase::GameOver(GameOutcome::Win));
        assert_eq!(state.score, state.brick_count());
    }
}
