//! Domain layer for the vouch client.
//!
//! This module contains the wire shapes and core types of the client,
//! independent of HTTP or terminal concerns. It follows domain-driven design
//! principles by keeping the data model isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`person`]: Person records, search envelopes, and create payloads
//! - [`review`]: Review records and the review submission payload
//! - [`auth`]: Login/registration payloads and token responses
//! - [`route`]: Navigation route directives

pub mod auth;
pub mod error;
pub mod person;
pub mod review;
pub mod route;

pub use auth::{ErrorBody, LoginRequest, RegisterRequest, TokenResponse};
pub use error::{Result, VouchError};
pub use person::{NewPerson, Person, PersonProfile, SearchEnvelope};
pub use review::{NewReview, Review};
pub use route::Route;
