//! Token store abstraction.
//!
//! This module defines the [`TokenStore`] trait that abstracts over durable
//! storage for the session token. The client needs exactly one string slot,
//! so the trait stays minimal: load once at startup, save on login, clear on
//! logout or session expiry.

use crate::domain::error::Result;

/// Abstraction over durable session-token storage.
///
/// # Implementations
///
/// - [`JsonTokenStore`](crate::storage::JsonTokenStore): a versioned JSON
///   file with atomic writes (default)
pub trait TokenStore: Send {
    /// Reads the persisted token, if any.
    ///
    /// Called once at startup; afterwards the in-memory copy inside the
    /// session is authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<String>>;

    /// Persists a freshly issued token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, token: &str) -> Result<()>;

    /// Removes the persisted token.
    ///
    /// Idempotent: clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn clear(&mut self) -> Result<()>;
}
