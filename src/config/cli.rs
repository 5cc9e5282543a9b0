use crate::app::AddReviewCommand;
use crate::composition::{select_backend, AppServices, BackendChoice};
use crate::config::toml_config::TomlConfig;
use crate::config::ReviewsConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "reviews")]
#[command(about = "Add and list reviews against a fake or HTTP backend")]
pub struct CliArgs {
    #[arg(long, help = "TOML file with a [reviews] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Backend to use: fake or http (auto-detect when omitted)")]
    pub service: Option<String>,

    #[arg(long, help = "Base URL of the reviews API")]
    pub base_url: Option<String>,

    #[arg(long, help = "Seed the fake backend with demo reviews")]
    pub seed: bool,

    #[arg(long, help = "Request timeout in seconds for the HTTP backend")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Log line format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List stored reviews
    List,
    /// Submit a new review
    Add {
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        comment: String,
    },
}

/// What one CLI invocation printed and the exit code it maps to.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOutcome {
    pub exit_code: i32,
    pub output: String,
}

impl CliArgs {
    /// Layers configuration: config file (or environment when no file is
    /// given), then command-line flags on top.
    pub fn resolve_config(&self) -> Result<ReviewsConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_reviews_config(),
            None => ReviewsConfig::from_env(),
        };

        if let Some(service) = self.service.clone().filter(|s| !s.is_empty()) {
            config.service = Some(service);
        }
        if let Some(base_url) = self.base_url.clone().filter(|u| !u.is_empty()) {
            config.base_url = Some(base_url);
        }
        if self.seed {
            config.use_seed_data = true;
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }

        Ok(config)
    }

    /// Resolves the backend, runs the subcommand and renders the result as
    /// pretty JSON. Exit code 0 on success, 2 on a failure result.
    pub async fn run(&self) -> Result<CliOutcome> {
        let config = self.resolve_config()?;
        tracing::debug!("Resolved config: {:?}", config);

        // Base URL problems surface from the HTTP backend on each call.
        if matches!(select_backend(&config), BackendChoice::Http { .. }) {
            if let Err(e) = config.validate() {
                tracing::warn!("Suspicious HTTP backend configuration: {}", e);
            }
        }

        let reviews = AppServices::new(config).build_review_uses();

        let (succeeded, output) = match &self.command {
            Command::List => {
                let result = reviews.list_reviews().await;
                (result.is_success(), serde_json::to_string_pretty(&result)?)
            }
            Command::Add {
                rating,
                title,
                comment,
            } => {
                let result = reviews
                    .add_review(AddReviewCommand {
                        rating: *rating,
                        title: title.clone(),
                        comment: comment.clone(),
                    })
                    .await;
                (result.is_success(), serde_json::to_string_pretty(&result)?)
            }
        };

        Ok(CliOutcome {
            exit_code: if succeeded { 0 } else { 2 },
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_add_subcommand() {
        let args = CliArgs::try_parse_from([
            "reviews", "add", "--rating", "5", "--title", "Great", "--comment", "Loved it",
        ])
        .unwrap();

        match args.command {
            Command::Add {
                rating,
                title,
                comment,
            } => {
                assert_eq!(rating, 5.0);
                assert_eq!(title, "Great");
                assert_eq!(comment, "Loved it");
            }
            other => panic!("expected add, got {:?}", other),
        }
        assert_eq!(args.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[reviews]\nservice = \"http\"\nbase_url = \"https://file.example.com\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let args = CliArgs::try_parse_from([
            "reviews", "--config", path.as_str(), "--service", "fake", "--seed", "list",
        ])
        .unwrap();
        let config = args.resolve_config().unwrap();

        assert_eq!(config.service_kind(), ServiceKind::Fake);
        assert_eq!(config.base_url(), Some("https://file.example.com"));
        assert!(config.use_seed_data);
    }

    #[tokio::test]
    async fn test_fake_backend_ignores_malformed_base_url() {
        let args = CliArgs::try_parse_from([
            "reviews", "--service", "fake", "--base-url", "not a url", "add", "--rating", "5",
            "--title", "Great", "--comment", "Loved it",
        ])
        .unwrap();
        let config = args.resolve_config().unwrap();
        assert!(matches!(select_backend(&config), BackendChoice::Fake { .. }));

        let outcome = args.run().await.unwrap();

        assert_eq!(outcome.exit_code, 0);
        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["review"]["title"], "Great");
    }

    #[tokio::test]
    async fn test_malformed_base_url_on_http_becomes_failure_result() {
        let args = CliArgs::try_parse_from([
            "reviews", "--service", "http", "--base-url", "not a url", "list",
        ])
        .unwrap();

        let outcome = args.run().await.unwrap();

        assert_eq!(outcome.exit_code, 2);
        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_rating_must_be_numeric() {
        let result = CliArgs::try_parse_from([
            "reviews", "add", "--rating", "five", "--title", "t", "--comment", "c",
        ]);
        assert!(result.is_err());
    }
}
