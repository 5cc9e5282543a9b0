use crate::domain::{AddReviewInput, Review, ReviewService};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Command issued by the calling layer. Kept apart from the service DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct AddReviewCommand {
    pub rating: f64,
    pub title: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddReviewResult {
    Success { review: Review },
    Failure { errors: Vec<String> },
}

impl AddReviewResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AddReviewResult::Success { .. })
    }
}

impl Serialize for AddReviewResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AddReviewResult", 2)?;
        match self {
            AddReviewResult::Success { review } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("review", review)?;
            }
            AddReviewResult::Failure { errors } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

/// Submits a review through `service`, folding any service error into
/// [`AddReviewResult::Failure`]. Single attempt; no validation at this layer.
pub async fn add_review(service: &dyn ReviewService, command: AddReviewCommand) -> AddReviewResult {
    let input = AddReviewInput {
        rating: command.rating,
        title: command.title,
        comment: command.comment,
    };

    tracing::debug!("Submitting review to {} backend", service.name());
    match service.add_review(input).await {
        Ok(output) => AddReviewResult::Success {
            review: output.review,
        },
        Err(e) => {
            tracing::warn!("Review submission failed: {}", e);
            AddReviewResult::Failure {
                errors: vec![e.to_string()],
            }
        }
    }
}
