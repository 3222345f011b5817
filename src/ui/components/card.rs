//! Person card component renderer.

use crate::ui::viewmodel::PersonCard;

/// Renders one person card as a multi-line block.
///
/// Layout:
///
/// ```text
/// Asha K  [person 1]
///   Company: Acme · City: Bengaluru (HSR) · Job: Engineer
///   ★★★★⯪ 4.6 (5 reviews)
///   Skills: Python, Azure, ML
/// ```
///
/// Absent detail and skill lines are dropped entirely rather than rendered
/// empty.
#[must_use]
pub fn render_person_card(card: &PersonCard) -> String {
    let mut lines = vec![format!("{}  [person {}]", card.name, card.id)];

    if !card.details.is_empty() {
        lines.push(format!("  {}", card.details.join(" · ")));
    }

    lines.push(format!("  {}", card.rating_line));

    if !card.skills.is_empty() {
        lines.push(format!("  Skills: {}", card.skills.join(", ")));
    }

    lines.join("\n")
}
