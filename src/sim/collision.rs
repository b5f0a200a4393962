//! Collision predicates and bounce response
//!
//! Pure geometry: a circular ball against axis-aligned paddles and the
//! horizontal field edges. Nothing here mutates state.

use glam::Vec2;

use super::state::{Ball, Field, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Ball/paddle overlap test.
///
/// The ball's bounding circle is compared against the paddle's box with
/// strict inequalities; grazing contact at exactly radius distance does
/// not count. The same predicate serves both paddles.
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x + ball.radius > paddle.pos.x
        && ball.pos.x - ball.radius < paddle.pos.x + paddle.size.x
        && ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.y - ball.radius < paddle.pos.y + paddle.size.y
}

/// Map the contact point to an outgoing angle.
///
/// The signed offset of the ball from the paddle's vertical center,
/// as a fraction of the half-height, scales linearly into
/// `[-MAX_BOUNCE_ANGLE, MAX_BOUNCE_ANGLE]`. A center hit returns 0.
pub fn bounce_angle(ball_y: f32, paddle: &Paddle) -> f32 {
    let collide_point = ball_y - paddle.center_y();
    (collide_point / (paddle.size.y / 2.0)) * MAX_BOUNCE_ANGLE
}

/// Rebuild the ball velocity after a paddle hit.
///
/// `direction` is +1.0 off the left paddle and -1.0 off the right. The
/// magnitude comes from the ball's speed target, not its previous
/// velocity.
pub fn deflect(speed: f32, angle: f32, direction: f32) -> Vec2 {
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}

/// True when the ball's top or bottom edge has passed a field edge.
pub fn hits_horizontal_wall(ball: &Ball, field: &Field) -> bool {
    ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > field.height
}
