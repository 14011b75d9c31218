// src/error.rs

//! Unified error handling for the archives library.

use std::fmt;

use thiserror::Error;

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request inputs could not be encoded into a valid URL
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connectivity failure (DNS, refused connection, reset, ...)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP status outside 200-299
    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    /// Response body did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Key-value persistence failed
    #[error("Storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a server error from an HTTP status code.
    pub fn server(status: u16) -> Self {
        Self::Server { status }
    }

    /// Create a decode error.
    pub fn decode(message: impl fmt::Display) -> Self {
        Self::Decode(message.to_string())
    }

    /// Create a storage error for a persisted key.
    pub fn storage(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came out of a catalog fetch attempt.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::Transport(_) | Self::Server { .. } | Self::Decode(_)
        )
    }
}
