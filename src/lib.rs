pub mod adapters;
pub mod app;
pub mod composition;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{FakeReviewService, HttpReviewService, HttpReviewServiceConfig};
pub use app::{AddReviewCommand, AddReviewResult, ListReviewsResult};
pub use composition::{AppServices, Registry, Reviews, REVIEWS_KEY};
pub use config::ReviewsConfig;
pub use domain::{Review, ReviewService};
pub use utils::error::{Result, ReviewsError};
