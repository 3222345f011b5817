//! Actions representing side effects to be executed by the driver.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing a user event. Actions bridge pure
//! state transformations and effectful operations: presenting markup,
//! performing full-page navigation, or scheduling a delayed navigation.
//!
//! Deferred navigation is expressed as data (`NavigateAfter` carries a
//! [`Duration`]) rather than as a registered callback, so tests can assert
//! the schedule without waiting on real timers.

use crate::domain::route::Route;
use std::time::Duration;

/// Commands representing side effects to be executed by the driver.
///
/// Actions are produced by the event handler and executed in sequence by the
/// driver loop. They are plain data and carry no execution machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Presents a rendered markup block (search results, profile, nav menu).
    Display(String),

    /// Performs a full-page navigation immediately.
    ///
    /// Emitted when the gateway discovers an expired session: the handler
    /// forwards the forced login navigation.
    Navigate(Route),

    /// Performs a full-page navigation after the given delay.
    ///
    /// Used for the post-submit redirects (home after login, login after
    /// registration, the created person after add-person, reload after a
    /// review).
    NavigateAfter {
        /// Destination view.
        route: Route,
        /// Delay before the navigation happens.
        delay: Duration,
    },
}
