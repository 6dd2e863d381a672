//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No clocks, sleeping or I/O
//! - Time only enters as the `dt` argument to `tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Axis, Collision};
pub use state::{Ball, Bounds, GameMode, GameState, Paddle, Player, Rules};
pub use tick::{PaddleIntent, TickInput, tick};
