//! Error types for the vouch client.
//!
//! This module defines the centralized error type [`VouchError`] and a type alias
//! [`Result`] for convenient error handling throughout the client. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for vouch client operations.
///
/// This enum consolidates all error conditions that can occur during a client
/// session, from network transport failures to token storage problems. Most
/// variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion with the `?` operator.
#[derive(Debug, Error)]
pub enum VouchError {
    /// Network transport failed before a usable response was obtained.
    ///
    /// Wraps errors from the HTTP client (connection refused, DNS failure,
    /// request build problems). Handlers surface these as a generic
    /// user-facing notice rather than propagating the details.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded into the expected shape.
    ///
    /// The string contains the serde error plus the endpoint context supplied
    /// by the caller.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Token storage operation failed.
    ///
    /// Occurs when the token file cannot be read, written, or parsed.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file is malformed or the API base URL
    /// cannot be parsed. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for vouch operations.
///
/// This is a type alias for `std::result::Result<T, VouchError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, VouchError>;
