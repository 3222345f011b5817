//! API layer: the network chokepoint of the client.
//!
//! Every call to the directory service passes through this layer. It owns
//! the session token, merges the default headers, performs exactly one
//! network attempt per user action, and detects session expiry centrally.
//!
//! # Modules
//!
//! - [`transport`]: one-exchange HTTP abstraction plus the `reqwest` backend
//! - [`session`]: session token lifecycle (memory + durable store)
//! - [`gateway`]: the request chokepoint with header injection and expiry
//!   detection

pub mod gateway;
pub mod session;
pub mod transport;

pub use gateway::{Gateway, Outcome, RequestOptions};
pub use session::Session;
pub use transport::{ApiResponse, ApiTransport, HttpTransport, Method};
