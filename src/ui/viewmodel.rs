//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from API responses.
//! View models contain no business logic and perform no I/O: they are
//! display-ready data (pre-formatted rating lines, truncated skill lists,
//! resolved field fallbacks) consumed by the component renderers.
//!
//! Because every builder here is a pure function of its input, the full
//! rendering path is testable without a terminal or a network.

use crate::domain::person::{Person, PersonProfile, SearchEnvelope};
use crate::domain::route::Route;
use crate::ui::helpers::{rating_line, star_glyphs};

/// Maximum number of skills shown on a card.
pub const SKILLS_SHOWN: usize = 3;

/// Display information for a single person card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCard {
    /// Server identifier, shown so the user can open the detail view.
    pub id: String,

    /// Resolved display name (primary key with legacy fallback).
    pub name: String,

    /// Present-only detail fields, e.g. `"Company: Acme"`.
    pub details: Vec<String>,

    /// Pre-formatted rating line: glyphs, one-decimal rating, review count.
    pub rating_line: String,

    /// Up to [`SKILLS_SHOWN`] skills.
    pub skills: Vec<String>,
}

/// Empty state shown when a search matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message; echoes the query when the server suggested adding
    /// the person.
    pub message: String,

    /// Call-to-action pointing at the add-person entry point.
    pub prompt: String,
}

/// Complete view model for a search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchViewModel {
    /// One card per matched record, best match first.
    pub cards: Vec<PersonCard>,

    /// Set exactly when `cards` is empty.
    pub empty: Option<EmptyState>,
}

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// Navigation menu for the current authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub links: Vec<NavLink>,
}

/// One rendered review on a person profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLine {
    /// Star glyphs for the integer rating.
    pub stars: String,

    /// Title, or the category when no title was given.
    pub heading: String,

    /// Free-text body.
    pub body: String,
}

/// Complete view model for a person detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewModel {
    pub card: PersonCard,
    pub reviews: Vec<ReviewLine>,
}

/// Builds the card for one person record.
///
/// Resolves the dual-key field fallbacks through the [`Person`] accessors,
/// drops absent detail fields, and truncates the skills list to
/// [`SKILLS_SHOWN`] entries.
#[must_use]
pub fn person_card(person: &Person) -> PersonCard {
    let mut details = Vec::new();
    if let Some(company) = &person.company {
        details.push(format!("Company: {company}"));
    }
    if let Some(city) = &person.city {
        match &person.area {
            Some(area) => details.push(format!("City: {city} ({area})")),
            None => details.push(format!("City: {city}")),
        }
    }
    if let Some(job_title) = &person.job_title {
        details.push(format!("Job: {job_title}"));
    }
    if let Some(category) = &person.category {
        details.push(format!("Category: {category}"));
    }

    PersonCard {
        id: person.id.clone(),
        name: person.display_name().to_string(),
        details,
        rating_line: rating_line(person.average_rating, person.review_total()),
        skills: person.skill_list().iter().take(SKILLS_SHOWN).cloned().collect(),
    }
}

/// Builds the view model for a search response.
///
/// An empty result set produces one of two empty states depending on the
/// server's `suggest_add_person` hint: a refine-your-search message echoing
/// the literal query, or a generic add-manually message. Both offer the
/// add-person entry point.
#[must_use]
pub fn search_view_model(envelope: &SearchEnvelope) -> SearchViewModel {
    if envelope.persons.is_empty() {
        let message = if envelope.suggest_add_person {
            format!(
                "No confident matches for \"{}\". Try refining your search, or add this person.",
                envelope.query
            )
        } else {
            "No people found. You can add this person manually.".to_string()
        };

        return SearchViewModel {
            cards: vec![],
            empty: Some(EmptyState {
                message,
                prompt: "Use `add-person` to create a new profile.".to_string(),
            }),
        };
    }

    SearchViewModel {
        cards: envelope.persons.iter().map(person_card).collect(),
        empty: None,
    }
}

/// Builds the view model for a person detail response.
#[must_use]
pub fn profile_view_model(profile: &PersonProfile) -> ProfileViewModel {
    let reviews = profile
        .reviews
        .iter()
        .map(|review| ReviewLine {
            stars: star_glyphs(f64::from(review.rating)),
            heading: review
                .title
                .clone()
                .or_else(|| review.category.clone())
                .unwrap_or_else(|| "Review".to_string()),
            body: review.comment.clone(),
        })
        .collect();

    ProfileViewModel {
        card: person_card(&profile.person),
        reviews,
    }
}

/// Builds the navigation menu for the given authentication state.
#[must_use]
pub fn nav_menu(authenticated: bool) -> NavMenu {
    let mut links = vec![
        NavLink {
            label: "Home".to_string(),
            target: Route::Home.to_string(),
        },
        NavLink {
            label: "Search People".to_string(),
            target: Route::Search.to_string(),
        },
    ];

    if authenticated {
        links.push(NavLink {
            label: "Add Person".to_string(),
            target: "/add-person".to_string(),
        });
        links.push(NavLink {
            label: "My Reviews".to_string(),
            target: "/my-reviews".to_string(),
        });
        links.push(NavLink {
            label: "Logout".to_string(),
            target: "logout".to_string(),
        });
    } else {
        links.push(NavLink {
            label: "Login".to_string(),
            target: Route::Login.to_string(),
        });
        links.push(NavLink {
            label: "Register".to_string(),
            target: "/register".to_string(),
        });
    }

    NavMenu { links }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(body: &str) -> Person {
        serde_json::from_str(body).expect("valid person json")
    }

    #[test]
    fn card_uses_fallback_name() {
        let card = person_card(&person(r#"{"id": "1", "full_name": "Asha K"}"#));
        assert_eq!(card.name, "Asha K");
    }

    #[test]
    fn card_truncates_skills_to_three() {
        let card = person_card(&person(
            r#"{"id": "1", "name": "A", "skills": ["a", "b", "c", "d", "e"]}"#,
        ));
        assert_eq!(card.skills, ["a", "b", "c"]);
    }

    #[test]
    fn card_skips_absent_detail_fields() {
        let card = person_card(&person(r#"{"id": "1", "name": "A", "company": "Acme"}"#));
        assert_eq!(card.details, ["Company: Acme"]);
    }

    #[test]
    fn suggest_add_empty_state_echoes_the_query() {
        let envelope = SearchEnvelope {
            query: "xyz".to_string(),
            suggest_add_person: true,
            ..SearchEnvelope::default()
        };

        let vm = search_view_model(&envelope);
        let empty = vm.empty.expect("empty state");
        assert!(empty.message.contains("xyz"), "{}", empty.message);
        assert!(empty.prompt.contains("add-person"));
    }

    #[test]
    fn plain_empty_state_is_generic() {
        let envelope = SearchEnvelope::default();
        let vm = search_view_model(&envelope);
        let empty = vm.empty.expect("empty state");
        assert!(empty.message.contains("add this person manually"));
    }

    #[test]
    fn nav_menu_differs_by_auth_state() {
        let labels = |authenticated| -> Vec<String> {
            nav_menu(authenticated)
                .links
                .into_iter()
                .map(|l| l.label)
                .collect()
        };

        assert_eq!(
            labels(true),
            ["Home", "Search People", "Add Person", "My Reviews", "Logout"]
        );
        assert_eq!(labels(false), ["Home", "Search People", "Login", "Register"]);
    }
}
