//! JSON file-based token store.
//!
//! This module persists the session token in a small, human-readable JSON
//! document. It uses atomic file writes (write-to-temp + rename) to prevent
//! corruption on crashes, and creates parent directories on first use.

use crate::domain::error::{Result, VouchError};
use crate::storage::backend::TokenStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk document format.
///
/// Wraps the single token slot in a versioned object so the format can grow
/// without breaking older files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    /// Version of the storage format for future migrations.
    version: u32,

    /// The persisted session token, absent when logged out.
    #[serde(default)]
    auth_token: Option<String>,
}

impl Default for TokenFile {
    fn default() -> Self {
        Self {
            version: 1,
            auth_token: None,
        }
    }
}

/// JSON file token store.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "auth_token": "eyJhbGciOi..."
/// }
/// ```
pub struct JsonTokenStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonTokenStore {
    /// Creates a token store backed by the given file.
    ///
    /// The file is not created until the first [`save`](TokenStore::save);
    /// parent directories are created eagerly so later writes cannot fail on
    /// a missing directory.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON token store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    fn read_document(&self) -> Result<TokenFile> {
        if !self.file_path.exists() {
            return Ok(TokenFile::default());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        serde_json::from_str(&contents)
            .map_err(|e| VouchError::Storage(format!("failed to parse token file: {e}")))
    }

    /// Writes the document using write-to-temp + rename so the file is never
    /// left in a partially written state.
    fn write_document(&self, document: &TokenFile) -> Result<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| VouchError::Storage(format!("failed to serialize token file: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "token file saved");
        Ok(())
    }
}

impl TokenStore for JsonTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let _span = tracing::debug_span!("token_load", path = ?self.file_path).entered();

        let document = self.read_document()?;

        tracing::debug!(present = document.auth_token.is_some(), "token loaded");
        Ok(document.auth_token)
    }

    fn save(&mut self, token: &str) -> Result<()> {
        let _span = tracing::debug_span!("token_save", path = ?self.file_path).entered();

        let mut document = self.read_document().unwrap_or_default();
        document.auth_token = Some(token.to_string());
        self.write_document(&document)
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("token_clear", path = ?self.file_path).entered();

        let mut document = self.read_document().unwrap_or_default();
        if document.auth_token.is_none() && !self.file_path.exists() {
            tracing::debug!("nothing to clear");
            return Ok(());
        }
        document.auth_token = None;
        self.write_document(&document)
    }
}
