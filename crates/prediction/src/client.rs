//! Prediction client and its status mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use mr_or_ms_core::{
    config::PredictionConfig,
    error::FetchError,
    traits::GenderPredictor,
    types::Prediction,
};

/// User agent for prediction requests.
const USER_AGENT_VALUE: &str = concat!("mr-or-ms/", env!("CARGO_PKG_VERSION"));

/// Client for the remote gender prediction service.
///
/// Issues exactly one GET per call. No caching, deduplication, or retry:
/// every submit reaches the service as one fresh request.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    /// HTTP client.
    client: reqwest::Client,

    /// Base URL for the service, without a trailing slash.
    base_url: String,
}

impl PredictionClient {
    /// Create a new prediction client.
    pub fn new(config: &PredictionConfig) -> Result<Self, FetchError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                FetchError::TransportError(format!("failed to create HTTP client: {}", e))
            })?;

        let base_url = config.api_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenderPredictor for PredictionClient {
    async fn predict(&self, name: &str) -> Result<Prediction, FetchError> {
        let url = format!("{}/", self.base_url);
        debug!(url = %url, name, "fetching gender prediction");

        let response = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| FetchError::TransportError(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => response.json().await.map_err(|e| {
                FetchError::TransportError(format!("malformed response body: {}", e))
            }),

            404 => Err(FetchError::NotFound),

            429 => Err(FetchError::RateLimited),

            code => Err(FetchError::ServerError(code)),
        }
    }
}
