//! Nominatim-style forward geocoding client.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ForwardGeocoder, GeocodeMatch};
use crate::error::BackendError;

const RESULT_LIMIT: usize = 5;

/// HTTP client for a Nominatim-compatible search endpoint.
pub struct NominatimClient {
    client: Client,
    url: String,
}

/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimClient {
    pub fn new(url: &str, timeout: Duration, user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl ForwardGeocoder for NominatimClient {
    async fn geocode(&self, text: &str) -> Result<Vec<GeocodeMatch>, BackendError> {
        let limit = RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", text), ("format", "json"), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let body = response.text().await?;
        let matches = parse_matches(&body)?;
        debug!("Geocoder returned {} matches for {:?}", matches.len(), text);
        Ok(matches)
    }
}

/// Decode a search response body, dropping entries whose coordinates
/// don't parse as numbers.
fn parse_matches(body: &str) -> Result<Vec<GeocodeMatch>, BackendError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;

    Ok(places
        .iter()
        .filter_map(|p| {
            let latitude = p.lat.parse::<f64>().ok()?;
            let longitude = p.lon.parse::<f64>().ok()?;
            Some(GeocodeMatch {
                latitude,
                longitude,
            })
        })
        .collect())
}
