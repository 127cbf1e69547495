//! Simulation configuration
//!
//! Screen size and entity tuning are passed explicitly into `Game::new`.
//! Every derived position (paddle starts, rebound snaps, ball center) is
//! computed here from these values.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Paddle dimensions and movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSpec {
    pub width: f32,
    pub height: f32,
    /// Gap between the screen edge and the paddle's outer side
    pub edge_offset: f32,
    /// Acceleration added per move press
    pub accel_step: f32,
    pub player_max_speed: f32,
    pub opponent_max_speed: f32,
}

impl Default for PaddleSpec {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            edge_offset: PADDLE_EDGE_OFFSET,
            accel_step: PADDLE_ACCEL_STEP,
            player_max_speed: PLAYER_MAX_SPEED,
            opponent_max_speed: OPPONENT_MAX_SPEED,
        }
    }
}

/// Ball dimensions, mass and speed limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSpec {
    pub size: f32,
    pub mass: f32,
    pub launch_speed: f32,
    pub serve_speed: f32,
    pub max_speed_x: f32,
    pub max_speed_y: f32,
    /// Multiplier applied to horizontal speed on every bat hit
    pub speed_step: f32,
    pub trail_length: usize,
    pub trail_interval: u32,
}

impl Default for BallSpec {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            mass: BALL_MASS,
            launch_speed: BALL_LAUNCH_SPEED,
            serve_speed: BALL_SERVE_SPEED,
            max_speed_x: BALL_MAX_SPEED_X,
            max_speed_y: BALL_MAX_SPEED_Y,
            speed_step: BALL_SPEED_STEP,
            trail_length: TRAIL_LENGTH,
            trail_interval: TRAIL_INTERVAL,
        }
    }
}

/// Full simulation config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle: PaddleSpec,
    pub ball: BallSpec,
    pub wind_strength: f32,
    pub noise_smoothness: f64,
    pub win_score: u32,
    /// Seed for serve directions, stars and the noise seed. `None` draws
    /// one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle: PaddleSpec::default(),
            ball: BallSpec::default(),
            wind_strength: WIND_STRENGTH,
            noise_smoothness: NOISE_SMOOTHNESS,
            win_score: WIN_SCORE,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Default config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configs the physics cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SimError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::invalid(field, format!("must be positive, got {value}")))
            }
        }

        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("paddle.width", self.paddle.width)?;
        positive("paddle.height", self.paddle.height)?;
        positive("paddle.accel_step", self.paddle.accel_step)?;
        positive("paddle.player_max_speed", self.paddle.player_max_speed)?;
        positive("paddle.opponent_max_speed", self.paddle.opponent_max_speed)?;
        positive("ball.size", self.ball.size)?;
        positive("ball.mass", self.ball.mass)?;
        positive("ball.launch_speed", self.ball.launch_speed)?;
        positive("ball.serve_speed", self.ball.serve_speed)?;
        positive("ball.max_speed_x", self.ball.max_speed_x)?;
        positive("ball.max_speed_y", self.ball.max_speed_y)?;

        if !(self.paddle.edge_offset.is_finite() && self.paddle.edge_offset >= 0.0) {
            return Err(SimError::invalid(
                "paddle.edge_offset",
                format!("must be non-negative, got {}", self.paddle.edge_offset),
            ));
        }
        if !self.wind_strength.is_finite() {
            return Err(SimError::invalid("wind_strength", "must be finite"));
        }
        if self.paddle.height > self.screen_height {
            return Err(SimError::invalid(
                "paddle.height",
                "paddle is taller than the screen",
            ));
        }
        if self.ball.size > self.screen_height {
            return Err(SimError::invalid("ball.size", "ball is taller than the screen"));
        }
        if 2.0 * (self.paddle.edge_offset + self.paddle.width) >= self.screen_width {
            return Err(SimError::invalid(
                "paddle.edge_offset",
                "paddles overlap horizontally",
            ));
        }
        if !(self.ball.speed_step >= 1.0) {
            return Err(SimError::invalid("ball.speed_step", "must be at least 1.0"));
        }
        if self.ball.trail_interval == 0 {
            return Err(SimError::invalid("ball.trail_interval", "must be non-zero"));
        }
        if !(self.noise_smoothness.is_finite() && self.noise_smoothness > 0.0) {
            return Err(SimError::invalid("noise_smoothness", "must be positive"));
        }
        if self.win_score == 0 {
            return Err(SimError::invalid("win_score", "must be non-zero"));
        }
        Ok(())
    }

    /// Start position (top-left) of the player's paddle
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.paddle.edge_offset, self.paddle_center_y())
    }

    /// Start position (top-left) of the opponent's paddle
    pub fn opponent_start(&self) -> Vec2 {
        Vec2::new(
            self.screen_width - (self.paddle.edge_offset + self.paddle.width),
            self.paddle_center_y(),
        )
    }

    fn paddle_center_y(&self) -> f32 {
        (self.screen_height / 2.0).floor() - (self.paddle.height / 2.0).floor()
    }

    /// Top-left of a centered ball
    pub fn ball_center(&self) -> Vec2 {
        let half = (self.ball.size / 2.0).floor();
        Vec2::new(
            (self.screen_width / 2.0).floor() - half,
            (self.screen_height / 2.0).floor() - half,
        )
    }

    /// Ball x after bouncing off the player's paddle
    pub fn rebound_player_x(&self) -> f32 {
        self.paddle.edge_offset + self.paddle.width + self.ball.size
    }

    /// Ball x after bouncing off the opponent's paddle
    pub fn rebound_opponent_x(&self) -> f32 {
        self.screen_width - (self.paddle.edge_offset + self.paddle.width) - self.ball.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_derived_positions() {
        let config = SimConfig::default();
        assert_eq!(config.player_start(), Vec2::new(10.0, 260.0));
        assert_eq!(config.opponent_start(), Vec2::new(1170.0, 260.0));
        assert_eq!(config.ball_center(), Vec2::new(596.0, 296.0));
        assert_eq!(config.rebound_player_x(), 38.0);
        assert_eq!(config.rebound_opponent_x(), 1162.0);
    }

    #[test]
    fn test_rejects_tall_paddle() {
        let mut config = SimConfig::default();
        config.paddle.height = 700.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfig {
                field: "paddle.height",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_mass() {
        let mut config = SimConfig::default();
        config.ball.mass = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_shrinking_speed_step() {
        let mut config = SimConfig::default();
        config.ball.speed_step = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "win_score": 3, "ball": { "mass": 4.0 } }"#).unwrap();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.ball.mass, 4.0);
        assert_eq!(config.ball.size, BALL_SIZE);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_rejects_backward_serve_and_offscreen_paddles() {
        let mut config = SimConfig::default();
        config.ball.serve_speed = -4.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfig {
                field: "ball.serve_speed",
                ..
            }
        ));

        let mut config = SimConfig::default();
        config.paddle.edge_offset = -50.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfig {
                field: "paddle.edge_offset",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite_speeds() {
        let mut config = SimConfig::default();
        config.ball.launch_speed = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.wind_strength = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.wind_strength = -0.4;
        assert!(config.validate().is_ok());
    }

    fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pong-sim-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_reads_json_file() {
        let path = temp_config("ok.json", r#"{ "win_score": 7, "seed": 99 }"#);
        let config = SimConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.win_score, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.paddle, PaddleSpec::default());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let path = temp_config("bad.json", "{ \"win_score\": ");
        let err = SimConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, SimError::ConfigParse(_)));
    }

    #[test]
    fn test_load_validates() {
        let path = temp_config("invalid.json", r#"{ "win_score": 0 }"#);
        let err = SimConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            err,
            SimError::InvalidConfig {
                field: "win_score",
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("/nonexistent/pong.json").unwrap_err();
        assert!(matches!(err, SimError::ConfigIo(_)));
    }
}
