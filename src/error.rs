//! Configuration errors
//!
//! The simulation itself has no failure paths; only loading tuning and
//! settings from JSON can fail.

/// Errors raised while loading or validating tuning and settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
