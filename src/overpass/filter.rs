//! Exact containment filter over road candidates.

use geo::{Contains, Coord, LineString, Point, Polygon};

use super::OverpassElement;
use crate::models::{BoundaryPolygon, Coordinate, RoadCandidate};

/// Build a closed ring polygon from the boundary, in (longitude, latitude)
/// coordinate order. Returns `None` for rings with fewer than three
/// distinct vertices.
pub fn boundary_to_polygon(boundary: &BoundaryPolygon) -> Option<Polygon<f64>> {
    let mut ring: Vec<Coord<f64>> = boundary
        .points()
        .iter()
        .map(|c| Coord {
            x: c.longitude,
            y: c.latitude,
        })
        .collect();

    if ring.len() < 3 {
        return None;
    }

    // Close the ring if needed
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    if ring.len() < 4 {
        return None;
    }

    Some(Polygon::new(LineString::new(ring), vec![]))
}

/// First way center inside the boundary, in backend response order.
pub fn first_center_inside(
    elements: &[OverpassElement],
    boundary: &BoundaryPolygon,
) -> Option<Coordinate> {
    let polygon = boundary_to_polygon(boundary)?;

    candidates(elements, &polygon)
        .into_iter()
        .find(|c| c.matched)
        .map(|c| c.coordinate)
}

/// Run the point-in-polygon test for each way center, preserving response
/// order. Non-way elements, ways without a center, and centers with
/// out-of-range coordinates drop out here.
fn candidates(elements: &[OverpassElement], polygon: &Polygon<f64>) -> Vec<RoadCandidate> {
    elements
        .iter()
        .filter(|e| e.element_type == "way")
        .filter_map(|e| e.center)
        .filter_map(|center| Coordinate::new(center.lat, center.lon).ok())
        .map(|coordinate| RoadCandidate {
            matched: polygon.contains(&Point::new(coordinate.longitude, coordinate.latitude)),
            coordinate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overpass::OverpassCenter;

    fn square_boundary() -> BoundaryPolygon {
        BoundaryPolygon::new(vec![
            Coordinate::new(8.0, 124.0).unwrap(),
            Coordinate::new(8.0, 125.0).unwrap(),
            Coordinate::new(9.0, 125.0).unwrap(),
            Coordinate::new(9.0, 124.0).unwrap(),
        ])
    }

    fn way(lat: f64, lon: f64) -> OverpassElement {
        OverpassElement {
            element_type: "way".to_string(),
            center: Some(OverpassCenter { lat, lon }),
        }
    }

    #[test]
    fn test_open_ring_is_closed() {
        let polygon = boundary_to_polygon(&square_boundary()).unwrap();
        let ring = polygon.exterior();
        assert_eq!(ring.0.first(), ring.0.last());
        assert_eq!(ring.0.len(), 5);
    }

    #[test]
    fn test_degenerate_ring() {
        assert!(boundary_to_polygon(&BoundaryPolygon::default()).is_none());

        let two_points = BoundaryPolygon::new(vec![
            Coordinate::new(8.0, 124.0).unwrap(),
            Coordinate::new(9.0, 125.0).unwrap(),
        ]);
        assert!(boundary_to_polygon(&two_points).is_none());
    }

    #[test]
    fn test_first_passing_wins_not_closest() {
        // Insiders at indices 2 and 5; index 5 is nearer the centroid but
        // index 2 must win.
        let elements = vec![
            way(10.0, 130.0),
            way(7.5, 124.5),
            way(8.2, 124.2),
            way(12.0, 124.5),
            way(8.0, 123.0),
            way(8.5, 124.5),
        ];

        let found = first_center_inside(&elements, &square_boundary()).unwrap();
        assert_eq!(found, Coordinate::new(8.2, 124.2).unwrap());
    }

    #[test]
    fn test_no_center_inside() {
        let elements = vec![way(10.0, 130.0), way(7.0, 120.0)];
        assert!(first_center_inside(&elements, &square_boundary()).is_none());
    }

    #[test]
    fn test_non_way_and_centerless_elements_are_skipped() {
        let elements = vec![
            OverpassElement {
                element_type: "node".to_string(),
                center: Some(OverpassCenter {
                    lat: 8.5,
                    lon: 124.5,
                }),
            },
            OverpassElement {
                element_type: "way".to_string(),
                center: None,
            },
            way(8.4, 124.4),
        ];

        let found = first_center_inside(&elements, &square_boundary()).unwrap();
        assert_eq!(found, Coordinate::new(8.4, 124.4).unwrap());
    }

    #[test]
    fn test_square_example() {
        let elements = vec![way(8.5, 124.5), way(10.0, 130.0)];
        let found = first_center_inside(&elements, &square_boundary()).unwrap();
        assert_eq!(found.latitude, 8.5);
        assert_eq!(found.longitude, 124.5);
    }
}
