//! Construction-time errors
//!
//! The simulation itself never fails: out-of-range motion is clamped. Only
//! building a game from a bad config or a broken noise backend can error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("noise backend unavailable: {0}")]
    NoiseBackend(String),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
