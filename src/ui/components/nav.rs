//! Navigation menu component renderer.

use crate::ui::viewmodel::NavMenu;

/// Renders the navigation menu as one line of labeled targets.
///
/// ```text
/// Home (/) · Search People (/search) · Login (/login) · Register (/register)
/// ```
#[must_use]
pub fn render_nav_menu(menu: &NavMenu) -> String {
    menu.links
        .iter()
        .map(|link| format!("{} ({})", link.label, link.target))
        .collect::<Vec<_>>()
        .join(" · ")
}
