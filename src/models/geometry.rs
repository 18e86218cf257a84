//! Geographic value types shared across the resolution workflow.

use serde::{Deserialize, Serialize};

use crate::error::InvalidCoordinate;

/// Default viewport span applied when deriving a region from a point.
pub const DEFAULT_SPAN: f64 = 0.01;

/// Geographic point (latitude/longitude, WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }
}

/// Map viewport: a center coordinate plus an angular span on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Viewport around a point with the default span.
    pub fn around(center: Coordinate) -> Self {
        Self::with_span(center, DEFAULT_SPAN, DEFAULT_SPAN)
    }

    /// Viewport around a point with an explicit span.
    pub fn with_span(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }
}

/// Ordered boundary ring supplied by the caller.
///
/// The closing point is implicit; the ring is never mutated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryPolygon(Vec<Coordinate>);

impl BoundaryPolygon {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Coordinate>> for BoundaryPolygon {
    fn from(points: Vec<Coordinate>) -> Self {
        Self(points)
    }
}
