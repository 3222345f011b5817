//! Navigation routes for full-page view transitions.
//!
//! The client performs no routing of its own: a route is a directive handed to
//! the surrounding navigation collaborator (in the terminal driver, a printed
//! location change). Routes are produced by the event handler and by the
//! request gateway when a session expires.

use std::fmt;

/// A view destination for a full-page navigation.
///
/// Routes are plain data. They are carried inside actions (and inside the
/// gateway's session-expired outcome) and only turned into an effect by the
/// driver executing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The landing view (`/`).
    Home,
    /// The login view (`/login`). Also the forced destination on session expiry.
    Login,
    /// The search view (`/search`).
    Search,
    /// A person detail view (`/person/{id}`).
    Person(String),
    /// Re-display of the current view, used after a successful review submission.
    Reload,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "/"),
            Self::Login => write!(f, "/login"),
            Self::Search => write!(f, "/search"),
            Self::Person(id) => write!(f, "/person/{id}"),
            Self::Reload => write!(f, "(reload)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn routes_render_as_paths() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Login.to_string(), "/login");
        assert_eq!(Route::Person("abc123".into()).to_string(), "/person/abc123");
    }
}
