//! Intermediate record produced while filtering road lookup results.

use super::Coordinate;

/// A candidate road center from the map-data service, tagged with the
/// outcome of the point-in-polygon test. Discarded after selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadCandidate {
    pub coordinate: Coordinate,
    pub matched: bool,
}
