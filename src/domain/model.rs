use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: f64,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Service-layer payload for creating a review.
///
/// Field-identical to [`crate::app::AddReviewCommand`] today, but owned by the
/// service contract so either side can change without touching the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddReviewInput {
    pub rating: f64,
    pub title: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddReviewOutput {
    pub review: Review,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListReviewsOutput {
    pub reviews: Vec<Review>,
}
