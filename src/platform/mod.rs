//! Platform abstraction layer
//!
//! Handles the parts of the loop that touch the outside world:
//! - Time/ticks and frame pacing
//! - Keyboard state for both players

pub mod input;
pub mod time;

pub use input::{Control, Direction, InputEvent, InputState, Key, Signal};
pub use time::{Clock, ManualClock, Pacer, SystemClock};
