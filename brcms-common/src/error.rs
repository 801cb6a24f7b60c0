//! Common error types for BRCMS

use thiserror::Error;

/// Common result type for BRCMS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across BRCMS crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login failed. Deliberately does not say which field was wrong.
    #[error("Ungültiger Benutzername oder Passwort")]
    InvalidCredentials,

    /// Storage key cannot be mapped onto the backend
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Asset is not a usable data-URI
    #[error("Invalid asset: {0}")]
    InvalidAsset(String),
}
