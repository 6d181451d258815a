//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::AgencyApi;
use crate::error::{ApiError, ApiResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn, Span};
use uuid::Uuid;

/// USAspending API client
///
/// Wraps a `reqwest::Client` and exposes one accessor per resource family.
/// Every call is a single GET followed by a JSON decode; nothing is retried
/// or cached. Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct UsaSpendingClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl UsaSpendingClient {
    /// Create a client against the public API with the given request timeout
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        Self::with_config(ClientConfig::default().with_timeout(timeout))
    }

    /// Create a client with configuration read from the environment
    pub fn from_env() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let inner = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Create a client around a caller-configured transport
    ///
    /// Timeouts, proxies and TLS settings are whatever `inner` was built with.
    #[must_use]
    pub fn with_http_client(inner: Client) -> Self {
        Self {
            inner,
            config: Arc::new(ClientConfig::default()),
        }
    }

    /// Create a client around a caller-configured transport and a custom base URL
    ///
    /// Only `base_url` is taken from `config`; the transport keeps its own settings.
    pub fn with_http_client_and_config(inner: Client, config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the underlying transport
    #[must_use]
    pub fn http_client(&self) -> &Client {
        &self.inner
    }

    /// Access agency endpoints
    #[must_use]
    pub fn agency(&self) -> AgencyApi {
        AgencyApi::new(self.clone())
    }

    /// Absolute URL for a path relative to the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.trimmed_base_url(),
            path.trim_start_matches('/')
        )
    }

    /// Perform a GET request and decode the JSON body
    ///
    /// The status code is not inspected: any body that decodes into `T` is
    /// returned, and any body that does not is a [`ApiError::Decode`].
    pub async fn get<T: DeserializeOwned>(&self, operation: &'static str, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        self.get_url(operation, &url).await
    }

    /// Perform a GET request to an absolute URL and decode the JSON body
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_url<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
    ) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let response = self.inner.get(url).send().await.map_err(|e| {
            warn!(request_id = %request_id, url = %url, error = %e, "Request failed");
            ApiError::request(operation, e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                error = %e,
                "Failed to read response body"
            );
            ApiError::request(operation, e)
        })?;

        let value = serde_json::from_slice(&body).map_err(|e| {
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                body_len = body.len(),
                error = %e,
                "Failed to decode response"
            );
            ApiError::decode(operation, status.as_u16(), e)
        })?;

        debug!(
            request_id = %request_id,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Request succeeded"
        );

        Ok(value)
    }
}
