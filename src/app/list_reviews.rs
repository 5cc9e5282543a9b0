use crate::domain::{Review, ReviewService};
use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum ListReviewsResult {
    Success { reviews: Vec<Review> },
    Failure { errors: Vec<String> },
}

impl ListReviewsResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ListReviewsResult::Success { .. })
    }
}

impl Serialize for ListReviewsResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ListReviewsResult", 2)?;
        match self {
            ListReviewsResult::Success { reviews } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("reviews", reviews)?;
            }
            ListReviewsResult::Failure { errors } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

pub async fn list_reviews(service: &dyn ReviewService) -> ListReviewsResult {
    tracing::debug!("Listing reviews from {} backend", service.name());
    match service.list_reviews().await {
        Ok(output) => ListReviewsResult::Success {
            reviews: output.reviews,
        },
        Err(e) => {
            tracing::warn!("Listing reviews failed: {}", e);
            ListReviewsResult::Failure {
                errors: vec![e.to_string()],
            }
        }
    }
}
