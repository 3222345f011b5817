//! Review records: the read shape attached to person profiles and the
//! write-only payload for submitting a new review.

use serde::{Deserialize, Serialize};

/// A review as returned inside a person profile.
///
/// Only the fields the client renders are decoded; the server attaches more
/// (per-dimension ratings, reviewer linkage) which are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,

    /// Integer rating in `[1, 5]`.
    #[serde(default)]
    pub rating: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-text review body. The server calls this `comment`.
    #[serde(default)]
    pub comment: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Payload for submitting a review via `POST /reviews/`.
///
/// Write-only from this client; validation (rating range, comment length)
/// is the server's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    /// Identifier of the person being reviewed.
    pub person_id: String,

    /// Integer rating in `[1, 5]`.
    pub rating: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-text review body.
    pub comment: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
