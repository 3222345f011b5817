//! Event handling: form submissions, search, and session operations.
//!
//! This module implements the core event handler. Each event corresponds to
//! one user-initiated action (a form submission, a search, a logout); the
//! handler validates it, performs at most one gateway call, and maps the
//! result to notices and actions.
//!
//! # Control flow
//!
//! ```text
//! Event → validation → Gateway call → notice / rendered markup → Vec<Action>
//! ```
//!
//! # Failure handling
//!
//! Three failure shapes, each terminal for the triggering action:
//!
//! - **Transport failure** (no response): logged, surfaced as a generic
//!   error notice, no actions emitted.
//! - **Application failure** (non-2xx): the server's `detail` message is
//!   shown, with a generic fallback when absent.
//! - **Session expiry** (401): the gateway has already cleared the token;
//!   the handler forwards the forced login navigation.
//!
//! Nothing is retried; the user retries manually.

use crate::api::gateway::{Gateway, Outcome};
use crate::api::transport::ApiResponse;
use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::domain::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::domain::error::Result;
use crate::domain::person::{NewPerson, Person, PersonProfile, SearchEnvelope};
use crate::domain::review::NewReview;
use crate::domain::route::Route;
use crate::ui::notice::Notice;
use crate::ui::renderer;
use std::time::Duration;

/// Minimum length of a trimmed search query.
pub const MIN_QUERY_LEN: usize = 2;

/// Delay before the post-login, post-add, and post-review redirects.
const SHORT_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Delay before the post-registration redirect to the login view.
const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Events triggered by user input.
///
/// Each event represents one discrete user action. The handler processes
/// them sequentially; no two gateway calls are ever in flight together.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Initial page load: render the navigation menu for the auth state.
    PageLoad,

    /// Search form submission.
    SubmitSearch {
        /// Raw query text; trimmed and length-checked before any call.
        query: String,
    },

    /// Login form submission.
    SubmitLogin { username: String, password: String },

    /// Registration form submission.
    ///
    /// `confirm_password` never leaves the client; it is compared against
    /// `password` before any network call.
    SubmitRegister {
        username: String,
        email: String,
        full_name: Option<String>,
        password: String,
        confirm_password: String,
    },

    /// Add-person form submission. Requires a held session token.
    SubmitPerson(NewPerson),

    /// Add-review form submission. Requires a held session token.
    SubmitReview(NewReview),

    /// Open a person detail view.
    ViewPerson { id: String },

    /// Logout: clear the session and return home.
    Logout,
}

/// Processes one event, posts notices to the state, and returns actions.
///
/// Performs at most one gateway call per event. Validation failures and
/// server rejections produce notices and an empty action list; successes
/// produce rendered markup or a (possibly deferred) navigation.
///
/// # Errors
///
/// Returns an error only for local failures the user cannot act on from a
/// notice: token storage problems while establishing or clearing the
/// session. Transport failures are absorbed here and surfaced as notices.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, gateway: &mut Gateway, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event = ?std::mem::discriminant(event)).entered();

    match event {
        Event::PageLoad => Ok(vec![Action::Display(renderer::render_nav(
            gateway.session().is_authenticated(),
        ))]),

        Event::SubmitSearch { query } => {
            let query = query.trim();
            if query.chars().count() < MIN_QUERY_LEN {
                state.notify(Notice::error("Please enter at least 2 characters to search"));
                return Ok(vec![]);
            }

            let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
            let outcome = match gateway.get(&format!("/persons/search?q={encoded}")) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "search request failed");
                    state.notify(Notice::error("Error searching for people"));
                    return Ok(vec![]);
                }
            };

            match outcome {
                Outcome::SessionExpired { goto } => Ok(vec![Action::Navigate(goto)]),
                Outcome::Completed(response) if response.is_success() => {
                    match response.json::<SearchEnvelope>() {
                        Ok(envelope) => {
                            tracing::debug!(
                                count = envelope.persons.len(),
                                suggest_add = envelope.suggest_add_person,
                                "search completed"
                            );
                            Ok(vec![Action::Display(renderer::render_search(&envelope))])
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "search response did not decode");
                            state.notify(Notice::error("Error searching for people"));
                            Ok(vec![])
                        }
                    }
                }
                Outcome::Completed(response) => {
                    notify_rejection(state, &response, "Error searching for people");
                    Ok(vec![])
                }
            }
        }

        Event::SubmitLogin { username, password } => {
            let payload = LoginRequest {
                username: username.clone(),
                password: password.clone(),
            };

            let outcome = match gateway.post_json("/auth/login", &payload) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "login request failed");
                    state.notify(Notice::error("Error during login"));
                    return Ok(vec![]);
                }
            };

            match outcome {
                Outcome::SessionExpired { goto } => Ok(vec![Action::Navigate(goto)]),
                Outcome::Completed(response) if response.is_success() => {
                    match response.json::<TokenResponse>() {
                        Ok(token) => {
                            gateway.session_mut().establish(token.access_token)?;
                            state.notify(Notice::success("Login successful!"));
                            Ok(vec![Action::NavigateAfter {
                                route: Route::Home,
                                delay: SHORT_REDIRECT_DELAY,
                            }])
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "login response did not decode");
                            state.notify(Notice::error("Error during login"));
                            Ok(vec![])
                        }
                    }
                }
                Outcome::Completed(response) => {
                    notify_rejection(state, &response, "Login failed");
                    Ok(vec![])
                }
            }
        }

        Event::SubmitRegister {
            username,
            email,
            full_name,
            password,
            confirm_password,
        } => {
            if password != confirm_password {
                state.notify(Notice::error("Passwords do not match"));
                return Ok(vec![]);
            }

            let payload = RegisterRequest {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
                full_name: full_name.clone(),
            };

            let outcome = match gateway.post_json("/auth/register", &payload) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "registration request failed");
                    state.notify(Notice::error("Error during registration"));
                    return Ok(vec![]);
                }
            };

            match outcome {
                Outcome::SessionExpired { goto } => Ok(vec![Action::Navigate(goto)]),
                Outcome::Completed(response) if response.is_success() => {
                    state.notify(Notice::success("Registration successful! Please login."));
                    Ok(vec![Action::NavigateAfter {
                        route: Route::Login,
                        delay: REGISTER_REDIRECT_DELAY,
                    }])
                }
                Outcome::Completed(response) => {
                    notify_rejection(state, &response, "Registration failed");
                    Ok(vec![])
                }
            }
        }

        Event::SubmitPerson(person) => {
            if !gateway.session().is_authenticated() {
                state.notify(Notice::error("Please login to add a person"));
                return Ok(vec![]);
            }

            let outcome = match gateway.post_json("/persons/", person) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "add-person request failed");
                    state.notify(Notice::error("Error adding person"));
                    return Ok(vec![]);
                }
            };

            match outcome {
                Outcome::SessionExpired { goto } => Ok(vec![Action::Navigate(goto)]),
                Outcome::Completed(response) if response.is_success() => {
                    match response.json::<Person>() {
                        Ok(created) => {
                            state.notify(Notice::success("Person added successfully!"));
                            Ok(vec![Action::NavigateAfter {
                                route: Route::Person(created.id),
                                delay: SHORT_REDIRECT_DELAY,
                            }])
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "created person did not decode");
                            state.notify(Notice::error("Error adding person"));
                            Ok(vec![])
                        }
                    }
                }
                Outcome::Completed(response) => {
                    notify_rejection(state, &response, "Failed to add person");
                    Ok(vec![])
                }
            }
        }

        Event::SubmitReview(review) => {
            if !gateway.session().is_authenticated() {
                state.notify(Notice::error("Please login to add a review"));
                return Ok(vec![]);
            }

            let outcome = match gateway.post_json("/reviews/", review) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "add-review request failed");
                    state.notify(Notice::error("Error adding review"));
                    return Ok(vec![]);
                }
            };

            match outcome {
                Outcome::SessionExpired { goto } => Ok(vec![Action::Navigate(goto)]),
                Outcome::Completed(response) if response.is_success() => {
                    state.notify(Notice::success("Review added successfully!"));
                    Ok(vec![Action::NavigateAfter {
                        route: Route::Reload,
                        delay: SHORT_REDIRECT_DELAY,
                    }])
                }
                Outcome::Completed(response) => {
                    notify_rejection(state, &response, "Failed to add review");
                    Ok(vec![])
                }
            }
        }

        Event::ViewPerson { id } => {
            let outcome = match gateway.get(&format!("/persons/{id}")) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "person detail request failed");
                    state.notify(Notice::error("Error loading person"));
                    return Ok(vec![]);
                }
            };

            match outcome {
                Outcome::SessionExpired { goto } => Ok(vec![Action::Navigate(goto)]),
                Outcome::Completed(response) if response.is_success() => {
                    match response.json::<PersonProfile>() {
                        Ok(profile) => Ok(vec![Action::Display(renderer::render_profile(&profile))]),
                        Err(e) => {
                            tracing::error!(error = %e, "person profile did not decode");
                            state.notify(Notice::error("Error loading person"));
                            Ok(vec![])
                        }
                    }
                }
                Outcome::Completed(response) => {
                    notify_rejection(state, &response, "Failed to load person");
                    Ok(vec![])
                }
            }
        }

        Event::Logout => {
            gateway.session_mut().clear()?;
            state.notify(Notice::success("Logged out successfully"));
            Ok(vec![Action::NavigateAfter {
                route: Route::Home,
                delay: SHORT_REDIRECT_DELAY,
            }])
        }
    }
}

/// Surfaces a non-2xx response: the server's `detail` message when present,
/// otherwise the given fallback.
fn notify_rejection(state: &mut AppState, response: &ApiResponse, fallback: &str) {
    let message = response
        .detail()
        .unwrap_or_else(|| fallback.to_string());
    tracing::debug!(status = response.status, message = %message, "request rejected");
    state.notify(Notice::error(message));
}
