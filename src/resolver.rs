//! Caller-facing resolution API.
//!
//! Combines the free-text geocoder and the polygon-constrained road
//! locator behind a contract that never surfaces errors: backend failures
//! are logged and collapsed to `NotFound` so a consuming view can always
//! fall back to its previous or default state.

use std::time::Duration;
use tracing::warn;

use crate::config::Config;
use crate::geocode::{ForwardGeocoder, NominatimClient};
use crate::models::{BoundaryPolygon, Coordinate, Region};
use crate::overpass::{OverpassClient, QueryTransport, RoadLocator};

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// A usable coordinate was found.
    Resolved(Coordinate),
    /// The backend was consulted but produced nothing usable.
    NotFound,
    /// Blank input or an empty boundary; no lookup was attempted.
    NotAttempted,
}

impl Resolution {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Resolution::Resolved(c) => Some(*c),
            _ => None,
        }
    }
}

/// Resolves search input to coordinates for a map view.
pub struct Resolver<G, T> {
    geocoder: G,
    roads: RoadLocator<T>,
    fallback: Region,
}

impl Resolver<NominatimClient, OverpassClient> {
    /// Build a resolver with HTTP backends from configuration.
    pub fn from_config(config: &Config) -> Self {
        let geocoder = NominatimClient::new(
            &config.geocoder.url,
            Duration::from_secs(config.geocoder.timeout_secs),
            &config.geocoder.user_agent,
        );
        let transport = OverpassClient::new(
            &config.overpass.url,
            Duration::from_secs(config.overpass.timeout_secs),
        );
        Self::new(geocoder, transport, config.fallback.region())
    }
}

impl<G: ForwardGeocoder, T: QueryTransport> Resolver<G, T> {
    pub fn new(geocoder: G, transport: T, fallback: Region) -> Self {
        Self {
            geocoder,
            roads: RoadLocator::new(transport),
            fallback,
        }
    }

    /// Resolve free text to the first coordinate the geocoding backend
    /// returns.
    pub async fn search_text(&self, text: &str) -> Resolution {
        let query = text.trim();
        if query.is_empty() {
            return Resolution::NotAttempted;
        }

        let matches = match self.geocoder.geocode(query).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Geocoding backend failed for {:?}: {}", query, e);
                return Resolution::NotFound;
            }
        };

        let Some(first) = matches.first() else {
            return Resolution::NotFound;
        };

        match Coordinate::new(first.latitude, first.longitude) {
            Ok(coordinate) => Resolution::Resolved(coordinate),
            Err(e) => {
                warn!("Discarding geocoder result: {}", e);
                Resolution::NotFound
            }
        }
    }

    /// Resolve a street name to a coordinate inside the boundary polygon.
    pub async fn search_road(&self, street: &str, boundary: &BoundaryPolygon) -> Resolution {
        let street = street.trim();
        if street.is_empty() || boundary.is_empty() {
            return Resolution::NotAttempted;
        }

        match self.roads.locate(street, boundary).await {
            Ok(Some(coordinate)) => Resolution::Resolved(coordinate),
            Ok(None) => Resolution::NotFound,
            Err(e) => {
                warn!("Road lookup failed for {:?}: {}", street, e);
                Resolution::NotFound
            }
        }
    }

    /// Viewport to render when nothing resolves.
    pub fn fallback_region(&self) -> Region {
        self.fallback
    }

    /// Viewport around a resolved coordinate, using the configured span.
    pub fn region_around(&self, center: Coordinate) -> Region {
        Region::with_span(
            center,
            self.fallback.latitude_delta,
            self.fallback.longitude_delta,
        )
    }
}
