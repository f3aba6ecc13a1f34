//! Unified error types for standup.

use thiserror::Error;

/// Result type alias using StandupError.
pub type Result<T> = std::result::Result<T, StandupError>;

#[derive(Error, Debug)]
pub enum StandupError {
    /// Malformed time-of-day at creation. Rejected before any state
    /// change; always surfaced to the caller.
    #[error("invalid time '{0}': expected hh:mm with hours 0-23 and minutes 0-59")]
    InvalidTime(String),

    // Delivery errors
    #[error("Channel error: {0}")]
    Channel(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Persistence errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl StandupError {
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_display() {
        let err = StandupError::InvalidTime("25:99".into());
        assert!(err.to_string().contains("25:99"));
        assert!(err.to_string().contains("hh:mm"));
    }

    #[test]
    fn test_error_constructors() {
        let e1 = StandupError::channel("unreachable");
        assert!(matches!(e1, StandupError::Channel(_)));

        let e2 = StandupError::config("bad toml");
        assert!(matches!(e2, StandupError::Config(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StandupError = io_err.into();
        assert!(matches!(err, StandupError::Io(_)));
    }
}
