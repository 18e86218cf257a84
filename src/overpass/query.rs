//! Overpass QL query construction.

use crate::models::BoundaryPolygon;

/// Build the road search query: all highway ways whose name matches the
/// street (case-insensitive), restricted to the boundary polygon, returned
/// with a representative center point per way.
pub fn build_road_query(street: &str, boundary: &BoundaryPolygon) -> String {
    format!(
        "[out:json];\n(\n  way[\"highway\"][\"name\"~\"{}\", i](poly:\"{}\");\n);\nout center;",
        escape_street_name(street),
        poly_filter(boundary)
    )
}

/// Escape a street name for interpolation into the quoted regex term.
///
/// Regex metacharacters are neutralized first, then backslashes and quotes
/// are escaped for the QL string literal, in that order.
fn escape_street_name(street: &str) -> String {
    regex::escape(street)
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}

/// Serialize the boundary as the space-separated "lat lon" pair list the
/// poly filter expects.
fn poly_filter(boundary: &BoundaryPolygon) -> String {
    boundary
        .points()
        .iter()
        .map(|c| format!("{} {}", c.latitude, c.longitude))
        .collect::<Vec<_>>()
        .join(" ")
}
