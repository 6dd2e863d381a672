//! Keyboard input state
//!
//! Key events update the per-player up/down intents. Confirm and quit are
//! one-shot signals handed back to the caller instead of being stored.

use crate::sim::{PaddleIntent, Player, TickInput};

/// A physical key, as reported by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Escape,
}

/// Event delivered by the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed or interrupt requested
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Logical control a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Move(Player, Direction),
    Confirm,
    Quit,
}

impl Control {
    /// Fixed bindings: W/S for player one, K/J for player two
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(c) => match c.to_ascii_lowercase() {
                'w' => Some(Control::Move(Player::One, Direction::Up)),
                's' => Some(Control::Move(Player::One, Direction::Down)),
                'k' => Some(Control::Move(Player::Two, Direction::Up)),
                'j' => Some(Control::Move(Player::Two, Direction::Down)),
                ' ' => Some(Control::Confirm),
                _ => None,
            },
            Key::Space => Some(Control::Confirm),
            Key::Escape => Some(Control::Quit),
        }
    }
}

/// One-shot request raised by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Confirm,
    Quit,
}

/// Held-key state for both paddles
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for the simulation tick
    pub fn tick_input(&self) -> &TickInput {
        &self.current
    }

    pub fn intent(&self, player: Player) -> PaddleIntent {
        self.current.intent(player)
    }

    /// Apply a key press. Returns a signal for confirm and quit keys.
    pub fn key_down(&mut self, key: Key) -> Option<Signal> {
        match Control::for_key(key)? {
            Control::Move(player, direction) => {
                self.set(player, direction, true);
                None
            }
            Control::Confirm => Some(Signal::Confirm),
            Control::Quit => Some(Signal::Quit),
        }
    }

    /// Apply a key release. Releasing confirm or quit does nothing.
    pub fn key_up(&mut self, key: Key) {
        if let Some(Control::Move(player, direction)) = Control::for_key(key) {
            self.set(player, direction, false);
        }
    }

    fn set(&mut self, player: Player, direction: Direction, pressed: bool) {
        let intent = &mut self.current.paddles[player.index()];
        match direction {
            Direction::Up => intent.up = pressed,
            Direction::Down => intent.down = pressed,
        }
    }
}
