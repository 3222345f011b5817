//! Top-level rendering coordinators.
//!
//! Each function here maps an API response (or auth state) to a complete
//! markup string through a two-step process: compute the view model, then
//! delegate to the component renderers. Everything is pure; the driver
//! decides when and where the markup is shown.

use crate::domain::person::{PersonProfile, SearchEnvelope};
use crate::ui::components;
use crate::ui::viewmodel;

/// Renders a search response: a list of person cards, or the empty state
/// matching the server's suggest-add hint.
#[must_use]
pub fn render_search(envelope: &SearchEnvelope) -> String {
    let vm = viewmodel::search_view_model(envelope);

    if let Some(empty) = &vm.empty {
        return components::render_empty_state(empty);
    }

    vm.cards
        .iter()
        .map(components::render_person_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders a person detail view with its reviews.
#[must_use]
pub fn render_profile(profile: &PersonProfile) -> String {
    components::render_profile(&viewmodel::profile_view_model(profile))
}

/// Renders the navigation menu for the given authentication state.
#[must_use]
pub fn render_nav(authenticated: bool) -> String {
    components::render_nav_menu(&viewmodel::nav_menu(authenticated))
}
