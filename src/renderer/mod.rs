//! Presentation boundary
//!
//! The session hands a `Frame` snapshot to a `Presenter` once per iteration
//! and drains input through an `EventSource`. Both are implemented by the
//! terminal front end; tests supply scripted ones.

pub mod terminal;

use std::io;

use glam::Vec2;

use crate::platform::InputEvent;
use crate::sim::{Bounds, GameMode};

pub use terminal::TerminalFrontend;

/// Frame background
pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];
pub const PADDLE_COLOR: [u8; 3] = [150, 20, 20];
pub const BALL_COLOR: [u8; 3] = [20, 20, 150];
pub const TEXT_COLOR: [u8; 3] = [255, 255, 255];

/// Everything needed to draw one frame. Borrowed only for the `present` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    /// Field size in simulation units
    pub field: Vec2,
    /// Left paddle first
    pub paddles: [Bounds; 2],
    pub ball: Bounds,
    pub message: &'a str,
    pub mode: GameMode,
}

/// Draws complete frames
pub trait Presenter {
    /// Clear and redraw everything
    fn present(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Supplies input events
pub trait EventSource {
    /// Append every pending event to `events`, oldest first. Never blocks.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) -> io::Result<()>;
}

/// A complete presentation/input boundary
pub trait Frontend: EventSource + Presenter {}

impl<T: EventSource + Presenter> Frontend for T {}
