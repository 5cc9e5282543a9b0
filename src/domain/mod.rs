// Domain layer: review model and the service port. Nothing here knows which backend is in use.

pub mod model;
pub mod ports;

pub use model::{AddReviewInput, AddReviewOutput, ListReviewsOutput, Review};
pub use ports::ReviewService;
