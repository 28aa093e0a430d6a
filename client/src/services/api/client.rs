//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::config::ClientConfig;
use crate::core::error::Result;
use crate::services::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::services::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Builder for configuring [`ApiClient`].
///
/// Starts from [`ClientConfig::default`]; every setter overrides one field.
/// Transport and token store default to [`ReqwestTransport`] and, depending on
/// `token_file`, a [`FileTokenStore`] or [`MemoryTokenStore`].
#[derive(Default)]
pub struct ApiClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    token_store: Option<Arc<dyn TokenStore>>,
}

impl ApiClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn fallback_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.fallback_base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.token_file = Some(path.into());
        self
    }

    /// Use a custom transport (mocks in tests, instrumented clients).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<ApiClient> {
        let config = self.config.normalized();
        config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout)?),
        };

        let tokens: Arc<dyn TokenStore> = match (self.token_store, &config.token_file) {
            (Some(store), _) => store,
            (None, Some(path)) => Arc::new(FileTokenStore::new(path)),
            (None, None) => Arc::new(MemoryTokenStore::new()),
        };

        Ok(ApiClient {
            transport,
            tokens,
            config,
        })
    }
}

/// HTTP client for the Islami App backend.
///
/// Cheap to share behind an `Arc`; holds no per-call state. Every backend
/// request picks up the current bearer token from the token store.
pub struct ApiClient {
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) tokens: Arc<dyn TokenStore>,
    pub(crate) config: ClientConfig,
}

impl ApiClient {
    /// Create a client configured from the environment.
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a client using a builder for configuration.
    ///
    /// ```rust,no_run
    /// use islami_client::ApiClient;
    /// use std::time::Duration;
    ///
    /// let client = ApiClient::builder()
    ///     .base_url("https://islami-app-backend.onrender.com")
    ///     .timeout(Duration::from_secs(20))
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn token_store(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    /// Absolute backend URL for `path` (which starts with `/`).
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Current token; storage failures read as "no token".
    pub(crate) fn bearer_token(&self) -> Option<String> {
        match self.tokens.access_token() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::debug!(error = %e, "Token store read failed, sending request without token");
                None
            }
        }
    }

    /// Send a backend request with the bearer token attached.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let request = request.bearer(self.bearer_token());
        let method = request.method.clone();
        let url = request.url.clone();
        let start = Instant::now();

        tracing::debug!(method = %method, url = %url, "Sending request");

        match self.transport.execute(request).await {
            Ok(response) => {
                let duration = start.elapsed();
                if response.is_success() {
                    tracing::debug!(
                        method = %method,
                        url = %url,
                        status = response.status,
                        duration_ms = duration.as_millis(),
                        "Request completed"
                    );
                } else {
                    tracing::warn!(
                        method = %method,
                        url = %url,
                        status = response.status,
                        duration_ms = duration.as_millis(),
                        "Request failed with non-success status"
                    );
                }
                Ok(response)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    method = %method,
                    url = %url,
                    duration_ms = start.elapsed().as_millis(),
                    "Request network error"
                );
                Err(e)
            }
        }
    }

    /// [`send`](Self::send) and decode a 2xx body as `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.send(request).await?.into_result()
    }
}
