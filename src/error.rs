//! Error types for the fallible outer layers (fetching, config, CLI input).
//!
//! The scorer itself is total and never returns an error. This module provides:
//! - `AppError`: domain-specific errors for I/O, parsing and network operations
//! - `Result<T>`: type alias for Results using AppError

use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Domain-specific errors for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network request failed
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Reading an input or config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input metadata could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config file is malformed
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
