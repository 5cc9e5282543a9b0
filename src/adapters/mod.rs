// Adapters layer: concrete ReviewService backends and the demo dataset.

pub mod fake;
pub mod http;
pub mod seed;

pub use fake::FakeReviewService;
pub use http::{HttpReviewService, HttpReviewServiceConfig};
pub use seed::seed_reviews;
