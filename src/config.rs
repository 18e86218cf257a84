//! Runtime configuration for the resolution backends.
//!
//! The fallback viewport is deliberately configuration, not a constant:
//! callers (and tests) substitute their own default map state.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

use crate::models::{Coordinate, Region, DEFAULT_SPAN};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub geocoder: GeocoderConfig,
    pub overpass: OverpassConfig,
    pub fallback: FallbackConfig,
}

/// Forward-geocoding backend settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: "https://nominatim.openstreetmap.org/search".to_string(),
            timeout_secs: 10,
            user_agent: "Molave/0.1 (location resolver)".to_string(),
        }
    }
}

/// Map-data query service settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OverpassConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: "https://overpass-api.de/api/interpreter".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Default viewport rendered when nothing resolves.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FallbackConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            latitude: 8.4542,
            longitude: 124.6319,
            latitude_delta: DEFAULT_SPAN,
            longitude_delta: DEFAULT_SPAN,
        }
    }
}

impl FallbackConfig {
    pub fn region(&self) -> Region {
        Region {
            center: Coordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            latitude_delta: self.latitude_delta,
            longitude_delta: self.longitude_delta,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.geocoder.url).context("Invalid geocoder URL")?;
        Url::parse(&self.overpass.url).context("Invalid overpass URL")?;
        Coordinate::new(self.fallback.latitude, self.fallback.longitude)
            .context("Invalid fallback coordinate")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.overpass.timeout_secs, 10);
        assert!(config.geocoder.url.starts_with("https://"));
        assert_eq!(config.fallback.region().latitude_delta, 0.01);
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [overpass]
            url = "http://localhost:8080/api/interpreter"

            [fallback]
            latitude = 14.6
            longitude = 121.0
            "#,
        )
        .unwrap();

        assert_eq!(config.overpass.url, "http://localhost:8080/api/interpreter");
        assert_eq!(config.overpass.timeout_secs, 10);
        assert_eq!(config.fallback.region().center.latitude, 14.6);
        assert_eq!(config.fallback.latitude_delta, 0.01);
    }
}
