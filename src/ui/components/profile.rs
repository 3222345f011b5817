//! Person profile component renderer.

use crate::ui::components::card::render_person_card;
use crate::ui::viewmodel::ProfileViewModel;

/// Renders a person detail view: the card followed by its reviews.
///
/// ```text
/// Asha K  [person 1]
///   ★★★★⯪ 4.6 (5 reviews)
///
/// Reviews:
///   ★★★★★  Great collaborator
///   Asha led our migration and kept everyone aligned.
/// ```
#[must_use]
pub fn render_profile(profile: &ProfileViewModel) -> String {
    let mut sections = vec![render_person_card(&profile.card)];

    if profile.reviews.is_empty() {
        sections.push("\nNo reviews yet.".to_string());
    } else {
        let mut block = String::from("\nReviews:");
        for review in &profile.reviews {
            block.push_str(&format!("\n  {}  {}\n  {}", review.stars, review.heading, review.body));
        }
        sections.push(block);
    }

    sections.join("\n")
}
