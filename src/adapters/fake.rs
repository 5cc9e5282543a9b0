use crate::domain::{AddReviewInput, AddReviewOutput, ListReviewsOutput, Review, ReviewService};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// In-memory backend. State lives only as long as the instance.
#[derive(Debug)]
pub struct FakeReviewService {
    reviews: Mutex<Vec<Review>>,
}

impl FakeReviewService {
    /// Starts with `initial`, oldest first.
    pub fn new(initial: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(initial),
        }
    }

    pub async fn len(&self) -> usize {
        self.reviews.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reviews.lock().await.is_empty()
    }
}

impl Default for FakeReviewService {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ReviewService for FakeReviewService {
    async fn add_review(&self, input: AddReviewInput) -> Result<AddReviewOutput> {
        validate_range("rating", input.rating, 1.0, 5.0)?;
        validate_non_empty_string("title", &input.title)?;
        validate_non_empty_string("comment", &input.comment)?;

        let mut reviews = self.reviews.lock().await;
        let review = Review {
            id: format!("review-{}", reviews.len() + 1),
            rating: input.rating,
            title: input.title,
            comment: input.comment,
            created_at: Utc::now(),
        };
        reviews.push(review.clone());

        tracing::debug!("Stored review {} ({} total)", review.id, reviews.len());
        Ok(AddReviewOutput { review })
    }

    async fn list_reviews(&self) -> Result<ListReviewsOutput> {
        // newest first; reversed insertion order breaks timestamp ties
        let mut reviews: Vec<Review> =
            self.reviews.lock().await.iter().rev().cloned().collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ListReviewsOutput { reviews })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
