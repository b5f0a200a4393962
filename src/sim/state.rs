//! Game state and core simulation types
//!
//! Plain data records, all owned by a single [`GameState`] that the loop
//! driver passes into update and render. No process-wide singletons.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Which vertical boundary a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Fixed playfield bounds, taken from the host surface once at startup
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle entity
///
/// `pos` is the top-left corner. The score lives on the paddle that
/// earned it, matching the side it defends.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    pub score: u32,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            color: COLOR_WHITE,
            score: 0,
        }
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// The ball entity
///
/// `speed` is the magnitude target used to rebuild velocity on a paddle
/// bounce; it is independent of the instantaneous `vel` and only changes
/// on contact or reset.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: [f32; 4],
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::splat(BALL_START_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
            color: COLOR_WHITE,
        }
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub field: Field,
    /// Player paddle, left edge
    pub player: Paddle,
    /// Computer paddle, right edge
    pub computer: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the paddles flush to the vertical edges
    /// and the ball at field center.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let field = Field { width, height };
        let paddle_y = height / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            seed,
            field,
            player: Paddle::new(Vec2::new(0.0, paddle_y)),
            computer: Paddle::new(Vec2::new(width - PADDLE_WIDTH, paddle_y)),
            ball: Ball::new(field.center()),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Score a point for one side and re-serve.
    pub fn award_point(&mut self, to: Side) {
        match to {
            Side::Left => self.player.score += 1,
            Side::Right => self.computer.score += 1,
        }
        log::debug!(
            "point to the {} side: {} - {}",
            to.as_str(),
            self.player.score,
            self.computer.score
        );
        self.reset_ball();
    }

    /// Re-serve after a point.
    ///
    /// The horizontal direction reverses relative to its pre-reset sign,
    /// so the serve travels toward whichever side just scored. Vertical
    /// velocity is deliberately left as-is.
    pub fn reset_ball(&mut self) {
        let r = self.ball.radius;
        self.ball.pos.x = self.field.width / 2.0;
        self.ball.pos.y = self.rng.random_range(r..self.field.height - r);
        self.ball.vel.x = -self.ball.vel.x;
        self.ball.speed = BALL_START_SPEED;
        log::debug!(
            "ball reset: serve at y={:.1} toward the {}",
            self.ball.pos.y,
            if self.ball.vel.x < 0.0 { "left" } else { "right" }
        );
    }
}
