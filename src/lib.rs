//! Molave - geocoded-location resolution for map views
//!
//! Resolves free-text searches and polygon-constrained street lookups to
//! coordinates suitable for centering a map viewport and placing a marker.

pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod overpass;
pub mod resolver;

pub use models::{BoundaryPolygon, Coordinate, Region, RoadCandidate};
pub use resolver::{Resolution, Resolver};
