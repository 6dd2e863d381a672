//! P0NG - A two-player paddle-and-ball game
//!
//! Core modules:
//! - `sim`: Simulation (entities, physics, collisions, game mode)
//! - `platform`: Frame pacing and keyboard input state
//! - `session`: The match session that owns all state and runs the loop
//! - `renderer`: Presentation boundary and the terminal front end
//! - `settings`: Process parameters with JSON overrides

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Target frame rate; the pacer never runs faster than this
    pub const FPS: u32 = 30;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 200.0;
    /// Gap between each paddle and its side of the field
    pub const PADDLE_MARGIN: f32 = 20.0;
    pub const LEFT_PADDLE_Y: f32 = 20.0;
    pub const RIGHT_PADDLE_Y: f32 = 400.0;

    /// Ball defaults
    pub const BALL_START_X: f32 = 60.0;
    pub const BALL_START_Y: f32 = 1.0;
    /// Ball size once play starts (it is 0x0 in the menu)
    pub const BALL_SIZE: f32 = 25.0;
    pub const BALL_SPEED_X: f32 = 200.0;
    pub const BALL_SPEED_Y: f32 = 100.0;

    /// Speed multiplier gained on every collision
    pub const SPEED_STEP: f32 = 0.0625;

    /// Status messages
    pub const WELCOME_MESSAGE: &str = "Welcome to P0NG!";
    pub const PAUSED_MESSAGE: &str = "[PAUSED]";
}
