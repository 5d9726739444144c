//! # Error Types
//!
//! Custom error types for joystick events using `thiserror`.

use thiserror::Error;

/// Main error type for joystick events
#[derive(Debug, Error)]
pub enum JoystickEventError {
    /// A required argument was missing or malformed (e.g. no event source)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An event id outside `ACTION_FIRST..=ACTION_LAST`
    #[error("Event id {0} is outside the valid range")]
    OutOfRangeDiscriminant(i32),

    /// A JSON line could not be turned into an event record
    #[error("Malformed event record: {0}")]
    Record(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for joystick events
pub type Result<T> = std::result::Result<T, JoystickEventError>;
