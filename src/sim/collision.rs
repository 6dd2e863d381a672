//! Collision detection and response
//!
//! Checks run in a fixed priority order and the first hit wins, so at most
//! one response happens per tick.

use super::state::{Ball, Paddle};

/// What the ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Right edge reached the right paddle
    RightPaddle,
    /// Left edge reached the left paddle
    LeftPaddle,
    /// Bottom edge reached the field height
    Floor,
    /// Top edge reached zero
    Ceiling,
}

/// Velocity component a collision flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Collision {
    pub fn axis(self) -> Axis {
        match self {
            Collision::RightPaddle | Collision::LeftPaddle => Axis::X,
            Collision::Floor | Collision::Ceiling => Axis::Y,
        }
    }
}

/// Find the highest-priority collision, if any.
///
/// Paddle checks use the ball's top y against the paddle span, so a ball that
/// only overlaps with its lower part slips past.
pub fn detect(ball: &Ball, paddles: &[Paddle; 2], field_height: f32) -> Option<Collision> {
    let ball = ball.bounds();
    let left = paddles[0].bounds();
    let right = paddles[1].bounds();

    if ball.right() >= right.left() && right.spans_y(ball.top()) {
        return Some(Collision::RightPaddle);
    }
    if ball.left() <= left.right() && left.spans_y(ball.top()) {
        return Some(Collision::LeftPaddle);
    }
    if ball.bottom() >= field_height {
        return Some(Collision::Floor);
    }
    if ball.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }
    None
}

/// Reflect the ball: negate the velocity component along the collision axis
#[inline]
pub fn reflect(ball: &mut Ball, collision: Collision) {
    match collision.axis() {
        Axis::X => ball.vel.x = -ball.vel.x,
        Axis::Y => ball.vel.y = -ball.vel.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn paddles() -> [Paddle; 2] {
        [
            Paddle::new(Vec2::new(20.0, 20.0), Vec2::new(30.0, 100.0)),
            Paddle::new(Vec2::new(750.0, 20.0), Vec2::new(30.0, 100.0)),
        ]
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            size: Vec2::splat(25.0),
            vel: Vec2::new(200.0, 100.0),
        }
    }

    #[test]
    fn test_right_paddle_hit() {
        let ball = ball_at(755.0, 50.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::RightPaddle));
    }

    #[test]
    fn test_right_paddle_edge_touch() {
        // Right edge exactly on the paddle face
        let ball = ball_at(725.0, 120.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::RightPaddle));
    }

    #[test]
    fn test_right_paddle_miss_below_span() {
        let ball = ball_at(755.0, 121.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), None);
    }

    #[test]
    fn test_left_paddle_hit() {
        let ball = ball_at(50.0, 60.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::LeftPaddle));
    }

    #[test]
    fn test_floor_and_ceiling() {
        let ball = ball_at(400.0, 575.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::Floor));

        let ball = ball_at(400.0, 0.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::Ceiling));

        let ball = ball_at(400.0, -1.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::Ceiling));
    }

    #[test]
    fn test_open_field() {
        let ball = ball_at(400.0, 300.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), None);
    }

    #[test]
    fn test_priority_paddle_before_wall() {
        // Right paddle reaching above the field: (a) and (d) both hold
        let mut pads = paddles();
        pads[1].pos.y = -50.0;
        let ball = ball_at(760.0, -1.0);
        assert_eq!(detect(&ball, &pads, 600.0), Some(Collision::RightPaddle));

        // Left paddle reaching below the field: (b) and (c) both hold
        let mut pads = paddles();
        pads[0].pos.y = 550.0;
        let ball = ball_at(30.0, 590.0);
        assert_eq!(detect(&ball, &pads, 600.0), Some(Collision::LeftPaddle));
    }

    #[test]
    fn test_priority_right_before_left() {
        // A ball wide enough to touch both paddles
        let mut ball = ball_at(40.0, 50.0);
        ball.size = Vec2::new(720.0, 25.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::RightPaddle));
    }

    #[test]
    fn test_floor_before_ceiling() {
        // Ball taller than the field
        let mut ball = ball_at(400.0, -10.0);
        ball.size = Vec2::new(25.0, 700.0);
        assert_eq!(detect(&ball, &paddles(), 600.0), Some(Collision::Floor));
    }

    #[test]
    fn test_reflect() {
        let mut ball = ball_at(0.0, 0.0);
        reflect(&mut ball, Collision::RightPaddle);
        assert_eq!(ball.vel, Vec2::new(-200.0, 100.0));
        reflect(&mut ball, Collision::Ceiling);
        assert_eq!(ball.vel, Vec2::new(-200.0, -100.0));
        reflect(&mut ball, Collision::LeftPaddle);
        reflect(&mut ball, Collision::Floor);
        assert_eq!(ball.vel, Vec2::new(200.0, 100.0));
    }
}
