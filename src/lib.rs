//! # vouch
//!
//! A terminal client for a people-directory and review service. Search for
//! people, read their aggregate ratings and reviews, and submit new profiles
//! and reviews over the service's REST API.
//!
//! ## Architecture
//!
//! The client follows a layered architecture with unidirectional data flow:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Driver (main.rs)                │
//! │        reads input, executes actions            │
//! └───────────────┬─────────────────────────────────┘
//!                 │ Event
//! ┌───────────────▼─────────────────────────────────┐
//! │              app::handle_event                  │
//! │   validation, one gateway call, notices         │
//! └───────┬─────────────────────────┬───────────────┘
//!         │                         │
//! ┌───────▼────────────┐  ┌─────────▼───────────────┐
//! │    api::Gateway    │  │      ui::renderer       │
//! │ headers, expiry    │  │  view models → markup   │
//! └───────┬────────────┘  └─────────────────────────┘
//!         │
//! ┌───────▼────────────┐
//! │ storage::TokenStore│
//! │  durable session   │
//! └────────────────────┘
//! ```
//!
//! Each user action flows through exactly once: the driver builds an
//! [`Event`](app::Event), the handler validates it and performs at most one
//! API call through the [`Gateway`](api::Gateway), and the returned
//! [`Action`](app::Action)s tell the driver what to display or where to
//! navigate. Rendering is pure; the gateway owns the session token; the
//! token store makes it durable.

pub mod api;
pub mod app;
pub mod domain;
pub mod observability;
pub mod storage;
pub mod ui;

pub use api::{Gateway, Session};
pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Result, Route, VouchError};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Client configuration, loaded from a TOML file with per-field defaults.
///
/// Every field is optional in the file; an absent file yields the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the directory service (no trailing `/api`).
    pub api_base_url: String,

    /// Path of the durable token file. Defaults to
    /// `$HOME/.local/share/vouch/token.json`.
    pub token_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. `"info"` or `"vouch=debug"`.
    pub trace_level: Option<String>,

    /// Notice lifetime in milliseconds.
    pub notice_ttl_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            token_file: None,
            trace_level: None,
            notice_ttl_ms: 5000,
        }
    }
}

impl Config {
    /// Parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`VouchError::Config`] if the file cannot be read or is not
    /// valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| VouchError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&text)
            .map_err(|e| VouchError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Loads the configuration from the default location, falling back to
    /// the defaults when no file exists.
    ///
    /// The default location is `$HOME/.config/vouch/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`VouchError::Config`] if a file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let path = home_dir().join(".config").join("vouch").join("config.toml");
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolves the token file path, applying the default when unset.
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.token_file.clone().unwrap_or_else(|| {
            home_dir()
                .join(".local")
                .join("share")
                .join("vouch")
                .join("token.json")
        })
    }

    /// Notice lifetime as a [`Duration`](std::time::Duration).
    #[must_use]
    pub fn notice_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notice_ttl_ms)
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Wires the production stack: token store, session, HTTP transport, gateway.
///
/// # Errors
///
/// Returns an error if the token store cannot be opened, a stored token
/// cannot be read, the HTTP client fails to build, or the configured base
/// URL is invalid.
pub fn initialize(config: &Config) -> Result<Gateway> {
    let store = storage::JsonTokenStore::new(config.token_path())?;
    let session = Session::load(Box::new(store))?;
    let transport = api::HttpTransport::new()?;
    Gateway::new(Box::new(transport), &config.api_base_url, session)
}
