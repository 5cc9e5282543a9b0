use crate::domain::{AddReviewInput, AddReviewOutput, ListReviewsOutput, ReviewService};
use crate::utils::error::{ReviewsError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Connection settings. A missing base URL is reported on each call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpReviewServiceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Backend talking to a JSON reviews API under `{base_url}/reviews`.
#[derive(Debug, Clone)]
pub struct HttpReviewService {
    config: HttpReviewServiceConfig,
    client: Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpReviewService {
    pub fn new(config: HttpReviewServiceConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn reviews_url(&self) -> Result<String> {
        let base = self
            .config
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ReviewsError::MissingConfigError {
                field: "base_url".to_string(),
            })?;
        Ok(format!("{}/reviews", base.trim_end_matches('/')))
    }

    fn with_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.timeout_seconds {
            Some(secs) => request.timeout(Duration::from_secs(secs)),
            None => request,
        }
    }

    /// Decodes a 2xx body, or builds an `ApiStatusError` from the `message`
    /// field, the raw body or the reason phrase, in that order.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ if !body.trim().is_empty() => body,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(ReviewsError::ApiStatusError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ReviewService for HttpReviewService {
    async fn add_review(&self, input: AddReviewInput) -> Result<AddReviewOutput> {
        let url = self.reviews_url()?;
        tracing::debug!("POST {}", url);

        let response = self
            .with_timeout(self.client.post(&url).json(&input))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_reviews(&self) -> Result<ListReviewsOutput> {
        let url = self.reviews_url()?;
        tracing::debug!("GET {}", url);

        let response = self.with_timeout(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn service_for(server: &MockServer) -> HttpReviewService {
        HttpReviewService::new(HttpReviewServiceConfig {
            base_url: Some(server.base_url()),
            timeout_seconds: Some(5),
        })
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_at_call_time() {
        let service = HttpReviewService::new(HttpReviewServiceConfig::default());

        let err = service.list_reviews().await.unwrap_err();

        assert!(matches!(err, ReviewsError::MissingConfigError { ref field } if field == "base_url"));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/reviews");
            then.status(200).json_body(serde_json::json!({"reviews": []}));
        });

        let service = HttpReviewService::new(HttpReviewServiceConfig {
            base_url: Some(format!("{}/", server.base_url())),
            timeout_seconds: None,
        });

        let output = service.list_reviews().await.unwrap();

        mock.assert();
        assert!(output.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_error_message_from_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/reviews");
            then.status(422)
                .json_body(serde_json::json!({"message": "rating must be 1-5"}));
        });

        let err = service_for(&server)
            .add_review(AddReviewInput {
                rating: 9.0,
                title: "Too good".to_string(),
                comment: "Off the scale".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API returned 422: rating must be 1-5");
    }

    #[tokio::test]
    async fn test_fractional_rating_is_decoded() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/reviews");
            then.status(201).json_body(serde_json::json!({
                "review": {
                    "id": "r-7",
                    "rating": 4.5,
                    "title": "Almost perfect",
                    "comment": "Half a star short",
                    "createdAt": "2024-05-01T09:30:00Z"
                }
            }));
        });

        let output = service_for(&server)
            .add_review(AddReviewInput {
                rating: 4.5,
                title: "Almost perfect".to_string(),
                comment: "Half a star short".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.review.rating, 4.5);
    }

    #[tokio::test]
    async fn test_error_message_from_plain_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/reviews");
            then.status(500).body("database unavailable");
        });

        let err = service_for(&server).list_reviews().await.unwrap_err();

        assert!(matches!(
            err,
            ReviewsError::ApiStatusError { status: 500, ref message } if message == "database unavailable"
        ));
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_reason_phrase() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/reviews");
            then.status(404);
        });

        let err = service_for(&server).list_reviews().await.unwrap_err();

        assert_eq!(err.to_string(), "API returned 404: Not Found");
    }
}
