//! The request gateway: the single chokepoint for API calls.
//!
//! Every outgoing call passes through [`Gateway::request`], which resolves
//! the relative path against the configured base URL and API prefix, merges
//! the JSON content-type header, injects a bearer-authorization header when a
//! token is held, and performs exactly one network attempt.
//!
//! Session expiry is detected here rather than at every call site: an
//! authentication-rejected status clears the token (memory and store) and
//! yields the distinguished [`Outcome::SessionExpired`] variant carrying the
//! forced login navigation. Callers must match on the outcome; an expired
//! session never produces an undefined result.

use crate::api::session::Session;
use crate::api::transport::{ApiResponse, ApiTransport, Method};
use crate::domain::error::{Result, VouchError};
use crate::domain::route::Route;
use serde::Serialize;

/// Path prefix prepended to every relative endpoint path.
const API_PREFIX: &str = "/api";

/// Status the server uses to reject an expired or invalid session.
const UNAUTHORIZED: u16 = 401;

/// Options for one gateway request.
///
/// Defaults to a bare GET with no body and no extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method; [`Method::Get`] by default.
    pub method: Option<Method>,

    /// Pre-serialized request body.
    pub body: Option<String>,

    /// Extra headers. On a name collision (case-insensitive) these win over
    /// the gateway's defaults.
    pub headers: Vec<(String, String)>,
}

/// The result of one gateway call.
///
/// A call either completes with a raw response for the caller to interpret,
/// or discovers that the session has expired. In the latter case the token
/// has already been cleared and the caller's only job is to forward the
/// navigation directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server responded; status and body are the caller's to interpret.
    Completed(ApiResponse),

    /// The server rejected the session. The token has been cleared from
    /// memory and durable storage; `goto` is the forced navigation target.
    SessionExpired {
        /// Destination of the forced navigation (the login view).
        goto: Route,
    },
}

/// Wraps every outgoing API call with header injection and expiry detection.
///
/// Owns the [`Session`] so credential reads and writes happen at the same
/// chokepoint the requests pass through.
pub struct Gateway {
    transport: Box<dyn ApiTransport>,
    base_url: String,
    session: Session,
}

impl Gateway {
    /// Creates a gateway against the given base URL.
    ///
    /// The URL is validated eagerly so a malformed configuration fails at
    /// startup instead of on the first request. A trailing slash is trimmed;
    /// the `/api` prefix is appended per call.
    ///
    /// # Errors
    ///
    /// Returns [`VouchError::Config`] if `base_url` is not a valid absolute URL.
    pub fn new(transport: Box<dyn ApiTransport>, base_url: &str, session: Session) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| VouchError::Config(format!("invalid API base URL {base_url:?}: {e}")))?;

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Returns the held session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the held session mutably (login and logout go through this).
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Performs one API call against `base_url + "/api" + path`.
    ///
    /// Merges a `Content-Type: application/json` header and, when a token is
    /// held, `Authorization: Bearer <token>`. Caller-supplied headers win on
    /// a name collision.
    ///
    /// Side effects per call: exactly one network attempt; at most one
    /// storage mutation and one navigation directive (both only on an
    /// authentication-rejected response). No retries, no timeout handling,
    /// no backoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport obtains no response. A received
    /// response, whatever its status, is an `Ok` outcome.
    pub fn request(&mut self, path: &str, options: RequestOptions) -> Result<Outcome> {
        let method = options.method.unwrap_or(Method::Get);
        let url = format!("{}{API_PREFIX}{path}", self.base_url);

        let _span = tracing::debug_span!("gateway_request", method = ?method, path = %path).entered();

        let headers = self.merge_headers(options.headers);
        let response = self
            .transport
            .send(method, &url, &headers, options.body.as_deref())?;

        if response.status == UNAUTHORIZED {
            tracing::warn!(path = %path, "session rejected by server; clearing token");
            self.session.clear()?;
            return Ok(Outcome::SessionExpired { goto: Route::Login });
        }

        tracing::debug!(status = response.status, "request completed");
        Ok(Outcome::Completed(response))
    }

    /// Convenience wrapper for a GET request with default options.
    ///
    /// # Errors
    ///
    /// Propagates transport failures from [`request`](Self::request).
    pub fn get(&mut self, path: &str) -> Result<Outcome> {
        self.request(path, RequestOptions::default())
    }

    /// Convenience wrapper for a POST with a JSON-serialized payload.
    ///
    /// # Errors
    ///
    /// Returns [`VouchError::Decode`] if the payload fails to serialize, and
    /// propagates transport failures from [`request`](Self::request).
    pub fn post_json<T: Serialize>(&mut self, path: &str, payload: &T) -> Result<Outcome> {
        let body = serde_json::to_string(payload)
            .map_err(|e| VouchError::Decode(format!("failed to serialize request body: {e}")))?;

        self.request(
            path,
            RequestOptions {
                method: Some(Method::Post),
                body: Some(body),
                headers: vec![],
            },
        )
    }

    /// Builds the final header list: defaults first, then caller overrides
    /// replacing any default with the same name (case-insensitive).
    fn merge_headers(&self, extra: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )];

        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        for (name, value) in extra {
            if let Some(existing) = headers
                .iter_mut()
                .find(|(n, _)| n.eq_ignore_ascii_case(&name))
            {
                existing.1 = value;
            } else {
                headers.push((name, value));
            }
        }

        headers
    }
}
