//! Core data models for the resolution workflow.

pub mod candidate;
pub mod geometry;

pub use candidate::RoadCandidate;
pub use geometry::{BoundaryPolygon, Coordinate, Region, DEFAULT_SPAN};
