//! Retro Pong - a classic two-paddle Pong simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-tick update)
//! - `renderer`: Read-only frame pass against a host-provided `Surface`
//! - `settings`: Startup configuration
//!
//! The host owns the drawing surface, pointer-event delivery and the
//! fixed-rate scheduler; this crate owns everything between them.

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate. The simulation carries no delta time, so the
    /// tick rate directly sets the play speed.
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Paddle defaults - the player defends the left edge, the computer
    /// the right
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;

    /// Ball defaults (speeds in pixels per tick)
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_START_SPEED: f32 = 10.0;
    /// Maximum ball speed
    pub const BALL_MAX_SPEED: f32 = 40.0;
    /// Speed gained on each tick of paddle contact
    pub const SPEED_INCREMENT: f32 = 0.2;

    /// Steepest outgoing angle off a paddle edge
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    /// Fraction of the vertical gap the computer paddle closes per tick
    pub const COMPUTER_TRACK_RATE: f32 = 0.1;

    /// Net geometry: fixed-height dashes down the field midline
    pub const NET_WIDTH: f32 = 5.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SPACING: f32 = 15.0;

    /// Score text size (drawn bold)
    pub const SCORE_FONT_SIZE: f32 = 120.0;

    /// Palette
    pub const COLOR_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const COLOR_GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const COLOR_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
