//! Application layer: events in, actions out.
//!
//! The driver translates user input into [`Event`]s, hands them to
//! [`handle_event`] together with the [`AppState`] and the gateway, and
//! executes the returned [`Action`]s. All decisions live in the handler;
//! the driver stays mechanical.

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, MIN_QUERY_LEN};
pub use state::AppState;
