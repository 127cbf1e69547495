//! Collision detection and response for axis-aligned rectangles
//!
//! Everything here is pure geometry; the rules that react to a hit
//! (speed ramp, wind, events) live on `Game`.

use glam::Vec2;

use super::ball::Ball;
use super::paddle::Paddle;

/// Full range of the reflected vertical speed, top edge to bottom edge
pub const REFLECT_RANGE: f32 = 8.0;

/// Strict overlap of two rectangles given by top-left and size.
/// Touching edges do not count.
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Whether the ball overlaps the paddle
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    rects_overlap(
        ball.pos,
        Vec2::new(ball.width, ball.height),
        paddle.pos,
        Vec2::new(paddle.width, paddle.height),
    )
}

/// Vertical speed for a ball leaving the paddle.
///
/// The impact point is normalized to 0 at the paddle's top edge and 1 at
/// its bottom edge, then shifted and scaled to [-4, 4].
#[inline]
pub fn reflect_angle(ball_y: f32, paddle_y: f32, paddle_height: f32) -> f32 {
    ((ball_y - paddle_y) / paddle_height - 0.5) * REFLECT_RANGE
}

/// Bounce the ball off the top or bottom edge.
///
/// Returns true if the ball was outside `[0, screen_height - height]`, in
/// which case it is clamped to the nearest bound and `vel.y` is negated.
pub fn bounce_off_edges(ball: &mut Ball, screen_height: f32) -> bool {
    let max_y = screen_height - ball.height;
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
    } else if ball.pos.y > max_y {
        ball.pos.y = max_y;
    } else {
        return false;
    }
    ball.vel.y = -ball.vel.y;
    true
}
