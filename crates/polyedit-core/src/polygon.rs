//! Polygon path: the ordered vertex list that is the editor's source of truth.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Ordered sequence of polygon vertices in logical coordinates.
///
/// Drawing order is rendering order. A closed ring repeats vertex 0 as its
/// last vertex. Serializes as a flat `[x0, y0, x1, y1, ...]` array, so the
/// coordinate count is always even.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct PolygonPath {
    points: Vec<Point>,
}

impl PolygonPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from vertices.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Create a path from a flat `[x0, y0, x1, y1, ...]` sequence.
    pub fn from_flat(coords: &[f64]) -> Result<Self, PathError> {
        if coords.len() % 2 != 0 {
            return Err(PathError::OddCoordinateCount(coords.len()));
        }
        let points = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Ok(Self { points })
    }

    /// Flatten into `[x0, y0, x1, y1, ...]`.
    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// The vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices (half the flat coordinate count).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The start vertex, used for closure detection.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Append a vertex.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Remove every vertex.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of distinct vertices, ignoring the closing duplicate of a ring.
    pub fn distinct_count(&self) -> usize {
        let mut seen: Vec<Point> = Vec::with_capacity(self.points.len());
        for &p in &self.points {
            if !seen.contains(&p) {
                seen.push(p);
            }
        }
        seen.len()
    }

    /// Whether the path is a closed ring: last vertex equals the first and at
    /// least three distinct vertices exist.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => {
                self.points.len() >= 4 && first == last && self.distinct_count() >= 3
            }
            _ => false,
        }
    }

    /// Axis-aligned bounding box, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let rect = self
            .points
            .iter()
            .fold(Rect::from_points(*first, *first), |rect, &p| {
                rect.union_pt(p)
            });
        Some(rect)
    }

    /// Build a `BezPath` through the vertices.
    ///
    /// `closed` appends a `ClosePath` element; the duplicate closing vertex of
    /// a ring is emitted as a regular `LineTo` either way.
    pub fn to_bez_path(&self, closed: bool) -> BezPath {
        path_through(&self.points, closed)
    }
}

/// Build a polyline (optionally closed) through arbitrary points.
pub fn path_through(points: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&start) = iter.next() {
        path.move_to(start);
        for &p in iter {
            path.line_to(p);
        }
        if closed {
            path.close_path();
        }
    }
    path
}

impl From<PolygonPath> for Vec<f64> {
    fn from(path: PolygonPath) -> Self {
        path.to_flat()
    }
}

impl TryFrom<Vec<f64>> for PolygonPath {
    type Error = PathError;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_flat(&coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ring() -> PolygonPath {
        PolygonPath::from_flat(&[
            100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0, 100.0, 100.0,
        ])
        .unwrap()
    }

    #[test]
    fn test_from_flat_pairs_coordinates() {
        let path = PolygonPath::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.points()[1], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_from_flat_rejects_odd_length() {
        let result = PolygonPath::from_flat(&[1.0, 2.0, 3.0]);
        assert_eq!(result, Err(PathError::OddCoordinateCount(3)));
    }

    #[test]
    fn test_to_flat_preserves_order() {
        let mut path = PolygonPath::new();
        path.push(Point::new(5.0, 6.0));
        path.push(Point::new(7.0, 8.0));
        assert_eq!(path.to_flat(), vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_closed_ring_detection() {
        assert!(square_ring().is_closed());

        let open = PolygonPath::from_flat(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0]).unwrap();
        assert!(!open.is_closed());

        // Returning to the start after two vertices is not a ring.
        let degenerate = PolygonPath::from_flat(&[0.0, 0.0, 10.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(!degenerate.is_closed());
    }

    #[test]
    fn test_distinct_count_ignores_closing_vertex() {
        assert_eq!(square_ring().distinct_count(), 4);
    }

    #[test]
    fn test_bounds() {
        let bounds = square_ring().bounds().unwrap();
        assert_eq!(bounds, Rect::new(100.0, 100.0, 200.0, 200.0));
        assert!(PolygonPath::new().bounds().is_none());
    }

    #[test]
    fn test_serializes_as_flat_array() {
        let path = PolygonPath::from_flat(&[1.5, 2.0, 3.0, 4.25]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[1.5,2.0,3.0,4.25]");

        let parsed: PolygonPath = serde_json::from_str("[1.0,2.0,3.0,4.0]").unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(serde_json::from_str::<PolygonPath>("[1.0,2.0,3.0]").is_err());
    }

    #[test]
    fn test_bez_path_element_count() {
        let path = square_ring();
        assert_eq!(path.to_bez_path(false).elements().len(), 5);
        assert_eq!(path.to_bez_path(true).elements().len(), 6);
        assert!(PolygonPath::new().to_bez_path(true).elements().is_empty());
    }
}
