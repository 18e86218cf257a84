//! Polygon-constrained road lookup against an Overpass-style map-data
//! service.
//!
//! The service's own spatial filter is approximate, so every returned way
//! center is re-checked with an exact point-in-polygon test before it can
//! win. Selection is first-match in backend response order.

mod client;
mod filter;
mod query;

pub use client::OverpassClient;
pub use filter::boundary_to_polygon;
pub use query::build_road_query;

use serde::Deserialize;
use tracing::debug;

use crate::error::BackendError;
use crate::models::{BoundaryPolygon, Coordinate};

/// Transport capability for the map-data query service: raw query text in,
/// raw response body out.
#[allow(async_fn_in_trait)]
pub trait QueryTransport {
    async fn fetch(&self, query: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

/// One result element. Only ways carrying a center point participate in
/// the containment filter.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub center: Option<OverpassCenter>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

/// Resolves a street name to a coordinate inside a boundary polygon.
pub struct RoadLocator<T> {
    transport: T,
}

impl<T: QueryTransport> RoadLocator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// One query round-trip plus the containment filter.
    ///
    /// `Ok(None)` means the backend was reached but nothing usable came
    /// back; backend failures surface as `BackendError` for the caller to
    /// collapse.
    pub async fn locate(
        &self,
        street: &str,
        boundary: &BoundaryPolygon,
    ) -> Result<Option<Coordinate>, BackendError> {
        let query = build_road_query(street, boundary);
        let body = self.transport.fetch(&query).await?;
        let response: OverpassResponse = serde_json::from_str(&body)?;

        if response.elements.is_empty() {
            debug!("No elements returned for street {:?}", street);
            return Ok(None);
        }

        Ok(filter::first_center_inside(&response.elements, boundary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticTransport {
        body: &'static str,
    }

    impl QueryTransport for StaticTransport {
        async fn fetch(&self, _query: &str) -> Result<String, BackendError> {
            Ok(self.body.to_string())
        }
    }

    fn square_boundary() -> BoundaryPolygon {
        BoundaryPolygon::new(vec![
            Coordinate::new(8.0, 124.0).unwrap(),
            Coordinate::new(8.0, 125.0).unwrap(),
            Coordinate::new(9.0, 125.0).unwrap(),
            Coordinate::new(9.0, 124.0).unwrap(),
        ])
    }

    #[tokio::test]
    async fn test_zero_elements_is_no_match() {
        let locator = RoadLocator::new(StaticTransport {
            body: r#"{"elements": []}"#,
        });

        let result = locator.locate("Velez", &square_boundary()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_center_inside_boundary_wins() {
        let locator = RoadLocator::new(StaticTransport {
            body: r#"{"elements": [
                {"type": "way", "id": 1, "center": {"lat": 8.5, "lon": 124.5}},
                {"type": "way", "id": 2, "center": {"lat": 10.0, "lon": 130.0}}
            ]}"#,
        });

        let result = locator.locate("Velez", &square_boundary()).await.unwrap();
        assert_eq!(result, Some(Coordinate::new(8.5, 124.5).unwrap()));
    }

    #[tokio::test]
    async fn test_malformed_body_is_backend_error() {
        let locator = RoadLocator::new(StaticTransport {
            body: "<html>gateway timeout</html>",
        });

        let result = locator.locate("Velez", &square_boundary()).await;
        assert!(matches!(result, Err(BackendError::Malformed(_))));
    }
}
