#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliArgs, CliOutcome, Command, LogFormat};

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const ENV_SERVICE: &str = "REVIEWS_SERVICE";
pub const ENV_BASE_URL: &str = "REVIEWS_BASE_URL";
pub const ENV_USE_SEED_DATA: &str = "REVIEWS_USE_SEED_DATA";

/// Backend selector. Anything other than `fake`/`http` means auto-detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Fake,
    Http,
    Auto,
}

impl ServiceKind {
    /// Case-insensitive; unset or unrecognised values map to `Auto`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("fake") => ServiceKind::Fake,
            Some("http") => ServiceKind::Http,
            _ => ServiceKind::Auto,
        }
    }
}

/// Inputs to backend selection, from env, a TOML file or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsConfig {
    /// Raw backend selector as given; see [`ServiceKind::parse`].
    pub service: Option<String>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub use_seed_data: bool,
    pub timeout_seconds: Option<u64>,
}

impl ReviewsConfig {
    /// Reads `REVIEWS_SERVICE`, `REVIEWS_BASE_URL` and `REVIEWS_USE_SEED_DATA`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset and
    /// only the exact string `true` enables seed data.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            service: non_empty(ENV_SERVICE),
            base_url: non_empty(ENV_BASE_URL),
            use_seed_data: lookup(ENV_USE_SEED_DATA).as_deref() == Some("true"),
            timeout_seconds: None,
        }
    }

    pub fn service_kind(&self) -> ServiceKind {
        ServiceKind::parse(self.service.as_deref())
    }

    /// Base URL if set and non-empty.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl Validate for ReviewsConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.base_url() {
            validate_url("base_url", url)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
