//! Simulation tick
//!
//! Advances the match by one variable timestep: paddles, then at most one
//! collision response, then the ball.

use super::collision::{self, Collision};
use super::state::{GameState, Player};

/// Movement intent for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Indexed by `Player::index`
    pub paddles: [PaddleIntent; 2],
}

impl TickInput {
    #[inline]
    pub fn intent(&self, player: Player) -> PaddleIntent {
        self.paddles[player.index()]
    }
}

/// Advance the game state by `dt` seconds.
///
/// Does nothing outside `GameMode::Playing`. Returns the collision handled
/// this tick, if any.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<Collision> {
    if !state.mode.is_active() {
        return None;
    }
    // Also maps NaN to zero
    let dt = dt.max(0.0);

    move_paddles(state, input, dt);

    let hit = collision::detect(&state.ball, &state.paddles, state.rules.field.y);
    if let Some(collision) = hit {
        collision::reflect(&mut state.ball, collision);
        state.multiplier += state.rules.speed_step;
        log::debug!(
            "{:?} at {:?}, multiplier now {}",
            collision,
            state.ball.pos,
            state.multiplier
        );
    }

    move_ball(state, dt);
    hit
}

/// Apply player intents. Up and down are independent, so holding both
/// cancels out.
fn move_paddles(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = state.rules.paddle_speed * dt;
    let field_height = state.rules.field.y;
    let confine = state.rules.confine_paddles;

    for player in Player::ALL {
        let intent = input.intent(player);
        let paddle = &mut state.paddles[player.index()];

        if intent.up {
            paddle.pos.y -= step;
        }
        if intent.down {
            paddle.pos.y += step;
        }
        if confine {
            let lowest = (field_height - paddle.size.y).max(0.0);
            paddle.pos.y = paddle.pos.y.min(lowest).max(0.0);
        }
    }
}

/// Integrate ball position with the current multiplier
fn move_ball(state: &mut GameState, dt: f32) {
    let ball = &mut state.ball;
    ball.pos += ball.vel * state.multiplier * dt;
}
