//! Person records and search response types.
//!
//! This module defines the wire shapes the directory service returns for
//! people and search results. The service has shipped two generations of its
//! person schema, so several logical fields arrive under one of two alternate
//! keys (`name`/`full_name`, `review_count`/`total_reviews`,
//! `skills`/`services_offered`). The accessors on [`Person`] implement the
//! documented preference order: primary key first, secondary key when the
//! primary is absent. The fallback is inherited schema debt, preserved for
//! compatibility rather than by design.
//!
//! No client-side validation happens here; the server owns all invariants.

use serde::{Deserialize, Serialize};

use crate::domain::review::Review;

/// A person or vendor record as returned by the directory service.
///
/// All fields except `id` are optional on the wire. Display code should go
/// through [`display_name`](Self::display_name),
/// [`review_total`](Self::review_total), and [`skill_list`](Self::skill_list)
/// instead of reading the aliased fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier.
    pub id: String,

    /// Display name (current schema).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Display name (legacy schema). Used only when `name` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Neighbourhood or locality within the city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,

    /// Offered skills (current schema).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Offered services (legacy schema). Used only when `skills` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_offered: Option<Vec<String>>,

    /// Aggregate rating in `[0.0, 5.0]`.
    #[serde(default)]
    pub average_rating: f64,

    /// Number of reviews (current schema).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    /// Number of reviews (legacy schema). Used only when `review_count` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
}

impl Person {
    /// Returns the display name, preferring `name` and falling back to
    /// `full_name` when `name` is absent or empty.
    ///
    /// Returns `"Unknown"` when neither field carries a value.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.full_name.as_deref()))
            .unwrap_or("Unknown")
    }

    /// Returns the review count, preferring `review_count` and falling back
    /// to `total_reviews`. Defaults to 0 when both are absent.
    #[must_use]
    pub fn review_total(&self) -> u32 {
        self.review_count
            .or(self.total_reviews)
            .unwrap_or(0)
    }

    /// Returns the skills list, preferring `skills` and falling back to
    /// `services_offered`. Returns an empty slice when both are absent.
    #[must_use]
    pub fn skill_list(&self) -> &[String] {
        self.skills
            .as_deref()
            .or(self.services_offered.as_deref())
            .unwrap_or(&[])
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Search response wrapper returned by `GET /persons/search`.
///
/// Bundles the matched records with the original query string and a server
/// hint for whether the empty state should suggest adding a missing entry.
/// Extra scoring fields the server includes (`parsed`, `top_score`,
/// `confidence_cutoff`) are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    /// The query string as the server received it.
    #[serde(default)]
    pub query: String,

    /// Number of records in `persons`.
    #[serde(default)]
    pub count: usize,

    /// Matched records, best match first.
    #[serde(default)]
    pub persons: Vec<Person>,

    /// Server hint: the query looked like a real person the directory does
    /// not know yet, so the empty state should prompt adding them.
    #[serde(default)]
    pub suggest_add_person: bool,
}

/// Payload for creating a person via `POST /persons/`.
///
/// Field presence mirrors the server's create model; empty optionals are
/// omitted from the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
}

/// Person detail response returned by `GET /persons/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub person: Person,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::{Person, SearchEnvelope};

    fn person_json(body: &str) -> Person {
        serde_json::from_str(body).expect("valid person json")
    }

    #[test]
    fn display_name_prefers_primary_key() {
        let person = person_json(r#"{"id": "1", "name": "Asha", "full_name": "Asha K"}"#);
        assert_eq!(person.display_name(), "Asha");
    }

    #[test]
    fn display_name_falls_back_to_full_name() {
        let person = person_json(r#"{"id": "1", "full_name": "Asha K"}"#);
        assert_eq!(person.display_name(), "Asha K");
    }

    #[test]
    fn empty_primary_name_is_treated_as_absent() {
        let person = person_json(r#"{"id": "1", "name": "", "full_name": "Asha K"}"#);
        assert_eq!(person.display_name(), "Asha K");
    }

    #[test]
    fn review_total_falls_back_to_legacy_key() {
        let person = person_json(r#"{"id": "1", "total_reviews": 7}"#);
        assert_eq!(person.review_total(), 7);

        let person = person_json(r#"{"id": "1", "review_count": 3, "total_reviews": 7}"#);
        assert_eq!(person.review_total(), 3);
    }

    #[test]
    fn skill_list_falls_back_to_services() {
        let person = person_json(r#"{"id": "1", "services_offered": ["plumbing", "wiring"]}"#);
        assert_eq!(person.skill_list(), ["plumbing", "wiring"]);
    }

    #[test]
    fn envelope_ignores_scoring_fields() {
        let envelope: SearchEnvelope = serde_json::from_str(
            r#"{
                "query": "asha",
                "count": 1,
                "persons": [{"id": "1", "name": "Asha"}],
                "top_score": 92,
                "confidence_cutoff": 77,
                "suggest_add_person": false
            }"#,
        )
        .expect("valid envelope");

        assert_eq!(envelope.count, 1);
        assert_eq!(envelope.persons[0].display_name(), "Asha");
        assert!(!envelope.suggest_add_person);
    }
}
