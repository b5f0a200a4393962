//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only (one tick = one frame, no delta time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bounce_angle, collides, deflect, hits_horizontal_wall};
pub use state::{Ball, Field, GameState, Paddle, Side};
pub use tick::{TickInput, pointer_to_paddle_y, tick};
