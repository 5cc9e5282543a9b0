use crate::domain::model::{AddReviewInput, AddReviewOutput, ListReviewsOutput};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backend capable of storing and listing reviews.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn add_review(&self, input: AddReviewInput) -> Result<AddReviewOutput>;
    async fn list_reviews(&self) -> Result<ListReviewsOutput>;

    /// Short backend label used in logs.
    fn name(&self) -> &'static str;
}
