//! Composition root: picks the review backend and binds the use cases to it.

pub mod registry;

pub use registry::{Key, Registry};

use crate::adapters::{seed_reviews, FakeReviewService, HttpReviewService, HttpReviewServiceConfig};
use crate::app::{add_review, list_reviews, AddReviewCommand, AddReviewResult, ListReviewsResult};
use crate::config::{ReviewsConfig, ServiceKind};
use crate::domain::ReviewService;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
pub type ListReviewsFn = Arc<dyn Fn() -> BoxFuture<ListReviewsResult> + Send + Sync>;
pub type AddReviewFn = Arc<dyn Fn(AddReviewCommand) -> BoxFuture<AddReviewResult> + Send + Sync>;

/// Handle under which the bound [`Reviews`] are shared with dependents.
pub const REVIEWS_KEY: Key<Reviews> = Key::new("Reviews");

/// Which backend to build, decided by [`select_backend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendChoice {
    Fake {
        seeded: bool,
    },
    Http {
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    },
}

impl BackendChoice {
    /// Constructs the backend. A seeded fake starts with [`seed_reviews`].
    pub fn build(self) -> Arc<dyn ReviewService> {
        match self {
            BackendChoice::Fake { seeded } => {
                let initial = if seeded { seed_reviews() } else { Vec::new() };
                Arc::new(FakeReviewService::new(initial))
            }
            BackendChoice::Http {
                base_url,
                timeout_seconds,
            } => Arc::new(HttpReviewService::new(HttpReviewServiceConfig {
                base_url,
                timeout_seconds,
            })),
        }
    }
}

/// Decides the backend from the configured kind, base URL and seed flag.
///
/// An explicit `http` kind is honoured even without a base URL; the HTTP
/// backend reports that when first called. With no recognised kind, a base URL
/// selects HTTP and its absence falls back to the fake backend.
pub fn select_backend(config: &ReviewsConfig) -> BackendChoice {
    let http = || BackendChoice::Http {
        base_url: config.base_url().map(str::to_string),
        timeout_seconds: config.timeout_seconds,
    };
    let fake = || BackendChoice::Fake {
        seeded: config.use_seed_data,
    };

    match config.service_kind() {
        ServiceKind::Fake => fake(),
        ServiceKind::Http => http(),
        ServiceKind::Auto if config.base_url().is_some() => http(),
        ServiceKind::Auto => fake(),
    }
}

/// Selects and builds the backend, logging which one was chosen.
pub fn create_review_service(config: &ReviewsConfig) -> Arc<dyn ReviewService> {
    let choice = select_backend(config);
    match &choice {
        BackendChoice::Fake { seeded } => {
            tracing::info!("Using in-memory review backend (seeded: {})", seeded)
        }
        BackendChoice::Http { base_url, .. } => tracing::info!(
            "Using HTTP review backend at {}",
            base_url.as_deref().unwrap_or("<unset>")
        ),
    }
    choice.build()
}

/// Bound use cases, ready to call.
#[derive(Clone)]
pub struct Reviews {
    list_reviews: ListReviewsFn,
    add_review: AddReviewFn,
}

impl Reviews {
    pub fn new(list_reviews: ListReviewsFn, add_review: AddReviewFn) -> Self {
        Self {
            list_reviews,
            add_review,
        }
    }

    /// Runs the bound list use case.
    pub async fn list_reviews(&self) -> ListReviewsResult {
        (self.list_reviews)().await
    }

    /// Runs the bound add use case.
    pub async fn add_review(&self, command: AddReviewCommand) -> AddReviewResult {
        (self.add_review)(command).await
    }
}

/// Holds the configuration and the review service resolved from it.
///
/// The service is created on first use and then reused until replaced with
/// [`AppServices::set_review_service`].
pub struct AppServices {
    config: ReviewsConfig,
    review_service: Option<Arc<dyn ReviewService>>,
}

impl AppServices {
    pub fn new(config: ReviewsConfig) -> Self {
        Self {
            config,
            review_service: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.review_service.is_some()
    }

    /// Returns the cached service, resolving it from config on first call.
    pub fn review_service(&mut self) -> Arc<dyn ReviewService> {
        let config = &self.config;
        Arc::clone(
            self.review_service
                .get_or_insert_with(|| create_review_service(config)),
        )
    }

    /// Replaces the cached service unconditionally.
    pub fn set_review_service(&mut self, service: Arc<dyn ReviewService>) {
        tracing::debug!("Review service overridden with {} backend", service.name());
        self.review_service = Some(service);
    }

    /// `list_reviews` bound to the resolved service.
    pub fn make_list_reviews(&mut self) -> ListReviewsFn {
        let service = self.review_service();
        Arc::new(move || {
            let service = Arc::clone(&service);
            let fut: BoxFuture<ListReviewsResult> =
                Box::pin(async move { list_reviews(service.as_ref()).await });
            fut
        })
    }

    /// `add_review` bound to the resolved service.
    pub fn make_add_review(&mut self) -> AddReviewFn {
        let service = self.review_service();
        Arc::new(move |command: AddReviewCommand| {
            let service = Arc::clone(&service);
            let fut: BoxFuture<AddReviewResult> =
                Box::pin(async move { add_review(service.as_ref(), command).await });
            fut
        })
    }

    /// Both bound use cases, sharing one service instance.
    pub fn build_review_uses(&mut self) -> Reviews {
        Reviews::new(self.make_list_reviews(), self.make_add_review())
    }

    /// Builds the bound use cases and publishes them under [`REVIEWS_KEY`].
    pub fn register_reviews(&mut self, registry: &mut Registry) -> Reviews {
        let reviews = self.build_review_uses();
        registry.provide(&REVIEWS_KEY, reviews.clone());
        reviews
    }
}
