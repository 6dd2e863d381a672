//! Game state and core simulation types
//!
//! Entities are plain data records mutated in place by the tick.

use glam::Vec2;

use crate::consts::{PAUSED_MESSAGE, WELCOME_MESSAGE};
use crate::settings::Settings;

/// Coarse game phase, advanced only by the confirm key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Welcome screen, ball not yet in play
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
}

impl GameMode {
    /// Mode reached when confirm is pressed in this mode
    pub fn on_confirm(self) -> Self {
        match self {
            GameMode::Menu => GameMode::Playing,
            GameMode::Playing => GameMode::Paused,
            GameMode::Paused => GameMode::Playing,
        }
    }

    /// Status text shown while in this mode
    pub fn message(self) -> &'static str {
        match self {
            GameMode::Menu => WELCOME_MESSAGE,
            GameMode::Playing => "",
            GameMode::Paused => PAUSED_MESSAGE,
        }
    }

    /// Whether physics advances in this mode
    pub fn is_active(self) -> bool {
        self == GameMode::Playing
    }
}

/// One of the two players; left paddle is player one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Inclusive vertical span test
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top() && y <= self.bottom()
    }
}

/// A player's paddle. Size is fixed after setup.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The ball. Zero-sized until play starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::ZERO,
            vel,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Fixed match parameters the tick needs
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub field: Vec2,
    pub paddle_speed: f32,
    pub ball_size: Vec2,
    pub speed_step: f32,
    pub confine_paddles: bool,
}

impl From<&Settings> for Rules {
    fn from(settings: &Settings) -> Self {
        Self {
            field: Vec2::new(settings.field_width, settings.field_height),
            paddle_speed: settings.paddle_speed,
            ball_size: Vec2::splat(settings.ball_size),
            speed_step: settings.speed_step,
            confine_paddles: settings.confine_paddles,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub mode: GameMode,
    /// Left paddle first
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Ball displacement scale; only ever grows
    pub multiplier: f32,
    pub rules: Rules,
}

impl GameState {
    /// Set up a match in the menu
    pub fn new(settings: &Settings) -> Self {
        let paddle = |player: Player, y: f32| {
            Paddle::new(
                Vec2::new(settings.paddle_x(player.index()), y),
                settings.paddle_size,
            )
        };

        Self {
            mode: GameMode::Menu,
            paddles: [
                paddle(Player::One, settings.left_paddle_y),
                paddle(Player::Two, settings.right_paddle_y),
            ],
            ball: Ball::new(settings.ball_start, settings.ball_velocity),
            multiplier: 1.0,
            rules: Rules::from(settings),
        }
    }

    #[inline]
    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    /// Apply the confirm key. Leaving the menu puts the ball into play.
    pub fn confirm(&mut self) -> GameMode {
        let next = self.mode.on_confirm();
        if self.mode == GameMode::Menu {
            self.ball.size = self.rules.ball_size;
        }
        log::info!("Mode {:?} -> {:?}", self.mode, next);
        self.mode = next;
        next
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.multiplier, 1.0);
        assert_eq!(state.ball.size, Vec2::ZERO);
        assert_eq!(state.ball.pos, Vec2::new(60.0, 1.0));
        assert_eq!(state.ball.vel, Vec2::new(200.0, 100.0));
        assert_eq!(state.paddle(Player::One).pos, Vec2::new(20.0, 20.0));
        assert_eq!(state.paddle(Player::Two).pos, Vec2::new(750.0, 400.0));
        assert_eq!(state.paddle(Player::Two).size, Vec2::new(30.0, 100.0));
    }

    #[test]
    fn test_confirm_cycle() {
        let mut state = GameState::default();

        assert_eq!(state.confirm(), GameMode::Playing);
        assert_eq!(state.ball.size, Vec2::splat(25.0));

        assert_eq!(state.confirm(), GameMode::Paused);
        assert_eq!(state.confirm(), GameMode::Playing);
        assert_eq!(state.confirm(), GameMode::Paused);
        assert_ne!(state.mode, GameMode::Menu);
    }

    #[test]
    fn test_ball_activated_only_from_menu() {
        let mut state = GameState::default();
        state.confirm();

        // Shrink it to prove later transitions leave the size alone
        state.ball.size = Vec2::splat(3.0);
        state.confirm();
        state.confirm();
        assert_eq!(state.ball.size, Vec2::splat(3.0));
    }

    #[test]
    fn test_mode_messages() {
        assert_eq!(GameMode::Menu.message(), "Welcome to P0NG!");
        assert_eq!(GameMode::Playing.message(), "");
        assert_eq!(GameMode::Paused.message(), "[PAUSED]");
        assert!(GameMode::Playing.is_active());
        assert!(!GameMode::Menu.is_active());
        assert!(!GameMode::Paused.is_active());
    }

    #[test]
    fn test_bounds_span_is_inclusive() {
        let paddle = Paddle::new(Vec2::new(750.0, 20.0), Vec2::new(30.0, 100.0));
        let bounds = paddle.bounds();
        assert!(bounds.spans_y(20.0));
        assert!(bounds.spans_y(120.0));
        assert!(!bounds.spans_y(120.5));
        assert_eq!(bounds.right(), 780.0);
    }
}
