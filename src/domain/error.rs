//! Error types for the Custom Board plugin.
//!
//! This module defines the centralized error type [`BoardError`] and a type alias
//! [`Result`] used throughout the crate. Every variant is non-fatal from the
//! shell's point of view: the plugin shim logs the error and keeps running with
//! whatever state it already had.

use thiserror::Error;

/// The main error type for Custom Board operations.
///
/// Variants follow the three failure families the shell has to survive:
/// network/transport failures, malformed responses and unavailable
/// persistence. The remaining variants cover configuration and programming
/// mistakes such as selecting a category that does not exist.
///
/// # Examples
///
/// ```
/// use custom_board::domain::BoardError;
///
/// let err = BoardError::Http { status: 502 };
/// assert_eq!(err.to_string(), "HTTP error: status 502");
/// ```
#[derive(Debug, Error)]
pub enum BoardError {
    /// The search endpoint answered with a non-success status code.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The request never produced a response (DNS, TLS, host refused, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not a JSON array of article records.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Reading from or writing to the preference storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A category index outside the fixed navigation list was requested.
    #[error("Unknown category index: {0}")]
    UnknownCategory(usize),

    /// A palette file could not be read or parsed.
    #[error("Palette error: {0}")]
    Palette(String),
}

/// A specialized `Result` type for Custom Board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
