//! Game settings
//!
//! Defaults come from `consts`. A JSON file named by `P0NG_SETTINGS` may
//! override any subset of fields.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Process parameters consumed by setup, the pacer and the physics step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Target frame rate
    pub fps: u32,

    // === Paddles ===
    pub paddle_size: Vec2,
    /// Vertical speed in pixels/s
    pub paddle_speed: f32,
    /// Gap between a paddle and its side of the field
    pub paddle_margin: f32,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    /// Keep paddles inside the field (off by default: paddles may leave it)
    pub confine_paddles: bool,

    // === Ball ===
    pub ball_start: Vec2,
    /// Size the ball takes when play starts
    pub ball_size: f32,
    pub ball_velocity: Vec2,
    /// Multiplier gained per collision
    pub speed_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: WINDOW_WIDTH,
            field_height: WINDOW_HEIGHT,
            fps: FPS,

            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            left_paddle_y: LEFT_PADDLE_Y,
            right_paddle_y: RIGHT_PADDLE_Y,
            confine_paddles: false,

            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_size: BALL_SIZE,
            ball_velocity: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),
            speed_step: SPEED_STEP,
        }
    }
}

impl Settings {
    /// Environment variable naming an optional JSON settings file
    pub const PATH_VAR: &'static str = "P0NG_SETTINGS";

    /// Minimum time between two simulation ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by `P0NG_SETTINGS`, if any
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Starting x of the left (index 0) or right (index 1) paddle
    pub fn paddle_x(&self, player: usize) -> f32 {
        if player == 0 {
            self.paddle_margin
        } else {
            self.field_width - self.paddle_margin - self.paddle_size.x
        }
    }
}
