//! Transport abstraction for API calls.
//!
//! This module defines the [`ApiTransport`] trait that abstracts over the
//! mechanism performing one HTTP exchange, plus the blocking `reqwest`
//! implementation used in production. The seam exists so the gateway and the
//! event handlers can be exercised in tests with a scripted transport and no
//! network.

use crate::domain::auth::ErrorBody;
use crate::domain::error::{Result, VouchError};
use serde::de::DeserializeOwned;

/// HTTP method subset used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A completed HTTP exchange: status code plus raw body text.
///
/// The transport never interprets bodies; decoding happens at the call site
/// via [`json`](Self::json) once the caller has inspected the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON into the requested type.
    ///
    /// # Errors
    ///
    /// Returns [`VouchError::Decode`] when the body does not match the
    /// expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| VouchError::Decode(format!("status {}: {e}", self.status)))
    }

    /// Extracts the server-supplied `detail` message from an error body.
    ///
    /// Best-effort: returns `None` when the body is not JSON or carries no
    /// `detail` field, letting callers fall back to a generic message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.detail)
    }
}

/// Abstraction over the mechanism performing one HTTP exchange.
///
/// Implementations perform exactly one attempt: no retries, no backoff.
/// Transport-level failures (connection refused, DNS) surface as `Err`;
/// any received response, whatever its status, surfaces as `Ok`.
pub trait ApiTransport: Send {
    /// Performs a single request and returns the status/body pair.
    ///
    /// `headers` are (name, value) pairs to apply verbatim; `body` is the
    /// pre-serialized request body, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was obtained.
    fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> Result<ApiResponse>;
}

/// Production transport backed by a blocking `reqwest` client.
///
/// One client instance is built per process and reused across calls so
/// connection pooling applies. Blocking I/O matches the client's
/// single-threaded, user-initiated call pattern: each handler turn performs
/// at most one request and waits for it.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl ApiTransport for HttpTransport {
    fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> Result<ApiResponse> {
        let _span = tracing::debug_span!("http_send", method = ?method, url = %url).entered();

        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        for (name, value) in headers {
            request = request.header(name, value);
        }

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!(status = status, body_len = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::ApiResponse;

    #[test]
    fn success_covers_the_2xx_range() {
        assert!(ApiResponse { status: 200, body: String::new() }.is_success());
        assert!(ApiResponse { status: 201, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 401, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 500, body: String::new() }.is_success());
    }

    #[test]
    fn detail_reads_the_server_message() {
        let response = ApiResponse {
            status: 400,
            body: r#"{"detail": "Username already registered"}"#.to_string(),
        };
        assert_eq!(response.detail().as_deref(), Some("Username already registered"));
    }

    #[test]
    fn detail_is_none_for_unparseable_bodies() {
        let response = ApiResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(response.detail(), None);
    }
}
