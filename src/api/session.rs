//! Session token lifecycle.
//!
//! The session is the single piece of shared mutable state in the client: an
//! opaque token string, loaded from the token store once at startup and
//! mutated in memory thereafter. Every mutation is mirrored to the store so
//! the credential survives restarts. There is no client-side expiry
//! tracking; expiry is discovered only when a request comes back rejected.

use crate::domain::error::Result;
use crate::storage::TokenStore;

/// Holds the session token and its durable store.
///
/// Owned by the [`Gateway`](crate::api::Gateway) so that all reads and
/// writes of the credential happen at the one chokepoint requests already
/// pass through. No ambient globals.
pub struct Session {
    token: Option<String>,
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Loads the session from the token store.
    ///
    /// Performs the one startup read; the in-memory copy is authoritative
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    pub fn load(store: Box<dyn TokenStore>) -> Result<Self> {
        let token = store.load()?;
        tracing::debug!(authenticated = token.is_some(), "session loaded");
        Ok(Self { token, store })
    }

    /// Returns the held token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns true when a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Installs a freshly issued token in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory token is still
    /// updated so the current run can proceed.
    pub fn establish(&mut self, token: String) -> Result<()> {
        tracing::debug!("session established");
        self.token = Some(token);
        // self.token is Some here by construction
        if let Some(token) = self.token.as_deref() {
            self.store.save(token)?;
        }
        Ok(())
    }

    /// Discards the token from memory and from the store.
    ///
    /// Used on logout and on an authentication-rejected response.
    ///
    /// # Errors
    ///
    /// Returns an error if clearing the store fails; the in-memory token is
    /// cleared regardless.
    pub fn clear(&mut self) -> Result<()> {
        tracing::debug!("session cleared");
        self.token = None;
        self.store.clear()
    }
}
