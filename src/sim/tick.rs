//! Fixed timestep simulation tick
//!
//! Core game loop that advances a level deterministically.

use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::paddle::PaddleInput;
use super::state::GameState;
use crate::consts::PADDLE_ZONE_ANGLES;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Manual paddle movement, ignored when `autopilot` is set
    pub paddle: PaddleInput,
    /// Demo mode: the paddle follows the lowest ball
    pub autopilot: bool,
}

/// How a level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every block was cleared
    Won,
    /// Every ball fell into the death zone
    Lost,
    /// `max_ticks` elapsed first
    TimedOut,
}

/// Advance the game state by one fixed timestep.
///
/// Returns the outcome once the level is over; further calls are no-ops
/// that keep returning it.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<GameOutcome> {
    if state.outcome.is_some() {
        return state.outcome;
    }

    state.time_ticks += 1;

    // Balls first, against the paddle position of the previous tick
    state.notify_all_time_passed();

    let paddle_input = if input.autopilot {
        autopilot_input(state)
    } else {
        input.paddle
    };
    let arena_width = state.config.arena_width;
    if let Some(paddle) = state.paddle_mut() {
        paddle.update(paddle_input, arena_width);
    }

    state.outcome = if state.remaining_blocks.value() <= 0 {
        state.score.increase(state.config.clear_bonus);
        Some(GameOutcome::Won)
    } else if state.remaining_balls.value() <= 0 {
        Some(GameOutcome::Lost)
    } else if state.time_ticks >= state.config.max_ticks {
        Some(GameOutcome::TimedOut)
    } else {
        None
    };

    if let Some(outcome) = state.outcome {
        log::info!(
            "Level over after {} ticks: {:?}, score {}",
            state.time_ticks,
            outcome,
            state.score.value()
        );
    }

    state.outcome
}

/// Steer toward the ball closest to the death zone
fn autopilot_input(state: &GameState) -> PaddleInput {
    let Some(paddle) = state.paddle() else {
        return PaddleInput::default();
    };
    let Some(ball_x) = state
        .balls
        .iter()
        .max_by(|a, b| a.center().y.total_cmp(&b.center().y))
        .map(|ball| ball.center().x)
    else {
        return PaddleInput::default();
    };

    let width = paddle.collision_rectangle().width;
    let zone_width = width / PADDLE_ZONE_ANGLES.len() as f64;
    // Keep the whole paddle on screen, one step of slack for overshoot, so it
    // never wraps while chasing
    let margin = width / 2.0 + paddle.speed();
    let target = (ball_x + autopilot_offset(state.time_ticks, zone_width))
        .clamp(margin, (state.config.arena_width - margin).max(margin));

    // Dead band of half a step so the paddle settles instead of oscillating
    let dead_band = paddle.speed() / 2.0;
    let offset = target - paddle.center_x();
    PaddleInput {
        left: offset < -dead_band,
        right: offset > dead_band,
    }
}

/// Where the paddle center sits relative to the ball it is catching.
///
/// Sweeps slowly between two zones left and right of center, so returns
/// cycle through every zone angle instead of bouncing straight up forever.
fn autopilot_offset(time_ticks: u64, zone_width: f64) -> f64 {
    let phase = time_ticks as f64 * 0.01;
    2.0 * zone_width * phase.sin()
}
