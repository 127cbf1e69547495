//! Pong Sim - A classic two-paddle Pong with noise-driven wind
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Screen, paddle and ball tuning
//! - `audio`: Event-to-sound mapping for an external audio backend
//! - `error`: Construction-time failures

pub mod audio;
pub mod config;
pub mod error;
pub mod sim;

pub use config::{BallSpec, PaddleSpec, SimConfig};
pub use error::SimError;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between the screen edge and each paddle
    pub const PADDLE_EDGE_OFFSET: f32 = 10.0;
    /// Acceleration added per up/down press
    pub const PADDLE_ACCEL_STEP: f32 = 1.5;
    pub const PLAYER_MAX_SPEED: f32 = 3.0;
    pub const OPPONENT_MAX_SPEED: f32 = 2.8;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_MASS: f32 = 8.0;
    /// Horizontal speed of the very first ball, before any serve
    pub const BALL_LAUNCH_SPEED: f32 = 5.0;
    /// Horizontal speed after a serve
    pub const BALL_SERVE_SPEED: f32 = 4.0;
    pub const BALL_MAX_SPEED_X: f32 = 8.0;
    pub const BALL_MAX_SPEED_Y: f32 = 8.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const BALL_SPEED_STEP: f32 = 1.05;

    /// Trail defaults
    pub const TRAIL_LENGTH: usize = 30;
    /// Record a trail point every N ticks
    pub const TRAIL_INTERVAL: u32 = 3;

    /// Wind force magnitude (vertical; horizontal is a quarter of this)
    pub const WIND_STRENGTH: f32 = 0.4;
    /// Divisor applied to the noise cursor, larger is smoother
    pub const NOISE_SMOOTHNESS: f64 = 20.0;

    /// First to this many points wins
    pub const WIN_SCORE: u32 = 5;

    /// Number of decorative stars
    pub const MAX_STARS: usize = 40;
}
