//! # Client Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file when one
//! is present). Validated before the client is built so a bad base URL fails
//! fast instead of silently falling back on every verse lookup.
//!
//! | Variable | Default |
//! |---|---|
//! | `API_URL` | `https://islami-app-backend.onrender.com` |
//! | `ALQURAN_API_URL` | `https://api.alquran.cloud/v1` |
//! | `ISLAMI_API_TIMEOUT_SECS` | `12` |
//! | `ISLAMI_TOKEN_FILE` | unset (tokens kept in memory) |

use super::error::{ApiError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Production backend.
pub const DEFAULT_BASE_URL: &str = "https://islami-app-backend.onrender.com";

/// Public Quran API used when the backend is unreachable.
pub const DEFAULT_FALLBACK_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Client-level timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

const MAX_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Primary backend base URL, no trailing slash
    pub base_url: String,

    /// Public Quran API base URL, no trailing slash
    pub fallback_base_url: String,

    /// Applied uniformly to backend and fallback requests
    pub timeout: Duration,

    /// Where credentials are persisted; `None` keeps them in memory
    pub token_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fallback_base_url: DEFAULT_FALLBACK_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token_file: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        // A missing .env is the normal case outside development.
        let _ = dotenvy::dotenv();

        let base_url = env::var("API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let fallback_base_url = env::var("ALQURAN_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_BASE_URL.to_string());

        let timeout = match env::var("ISLAMI_API_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|e| {
                ApiError::Config(format!("ISLAMI_API_TIMEOUT_SECS must be a whole number: {}", e))
            })?),
            Err(_) => DEFAULT_TIMEOUT,
        };

        let token_file = env::var("ISLAMI_TOKEN_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            base_url,
            fallback_base_url,
            timeout,
            token_file,
        }
        .normalized();
        config.validate()?;
        Ok(config)
    }

    /// Strip surrounding whitespace and trailing slashes from the base URLs.
    pub fn normalized(mut self) -> Self {
        self.base_url = trim_base_url(&self.base_url);
        self.fallback_base_url = trim_base_url(&self.fallback_base_url);
        self
    }

    /// Validate URLs and timeout.
    pub fn validate(&self) -> Result<()> {
        check_http_url("API_URL", &self.base_url)?;
        check_http_url("ALQURAN_API_URL", &self.fallback_base_url)?;

        if self.timeout.is_zero() || self.timeout > MAX_TIMEOUT {
            return Err(ApiError::Config(format!(
                "timeout must be between 1 and {} seconds",
                MAX_TIMEOUT.as_secs()
            )));
        }

        Ok(())
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn check_http_url(name: &str, url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ApiError::Config(format!("{} is not a valid URL ({}): {}", name, url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ApiError::Config(format!(
            "{} must use http or https, got {}",
            name, other
        ))),
    }
}
