// Application layer: use cases that orchestrate a ReviewService and never return Err.

pub mod add_review;
pub mod list_reviews;

pub use add_review::{add_review, AddReviewCommand, AddReviewResult};
pub use list_reviews::{list_reviews, ListReviewsResult};
