//! Authentication request and response shapes.

use serde::{Deserialize, Serialize};

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
///
/// The password confirmation never leaves the client; handlers compare it
/// against `password` before building this payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Successful response from the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque session token authorizing subsequent API requests.
    pub access_token: String,
}

/// Error body shape shared by all endpoints.
///
/// Failed responses carry a human-readable `detail` field. Decoding is
/// best-effort; handlers fall back to a generic message when the body does
/// not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
