//! HTTP transport for the Overpass interpreter endpoint.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::QueryTransport;
use crate::error::BackendError;

/// Submits QL queries as a plain-text POST body, one round-trip per call.
/// No caching, no retries.
pub struct OverpassClient {
    client: Client,
    url: String,
}

impl OverpassClient {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl QueryTransport for OverpassClient {
    async fn fetch(&self, query: &str) -> Result<String, BackendError> {
        debug!("Overpass query:\n{}", query);

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain")
            .body(query.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
