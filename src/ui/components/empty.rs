//! Empty state component renderer.
//!
//! Renders the message shown when a search matched nothing: either a
//! refine-your-search prompt echoing the query, or a generic add-manually
//! message. The view model decides which; this component only lays it out.

use crate::ui::viewmodel::EmptyState;

/// Renders the empty state as a two-line block: message, then the
/// add-person call-to-action.
#[must_use]
pub fn render_empty_state(empty: &EmptyState) -> String {
    format!("{}\n{}", empty.message, empty.prompt)
}
