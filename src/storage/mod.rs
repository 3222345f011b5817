//! Storage layer for the persisted session token.
//!
//! This module provides the durable key-value slot the client keeps between
//! runs: a single session token. The token is read once at startup into the
//! session, written on login, and cleared on logout or session expiry.
//!
//! # Modules
//!
//! - `backend`: Token store trait abstraction for backend implementations
//! - `json`: JSON file-based implementation with atomic writes

pub mod backend;
pub mod json;

pub use backend::TokenStore;
pub use json::JsonTokenStore;
