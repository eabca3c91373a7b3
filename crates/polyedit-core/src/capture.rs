//! Point capture with proximity-based polygon closure.

use kurbo::Point;

use crate::polygon::PolygonPath;

/// Default distance (logical units) from the start vertex that closes the ring.
pub const PROXIMITY_THRESHOLD: f64 = 10.0;

/// What a captured point did to the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureOutcome {
    /// The point was appended as a new vertex.
    Appended(Point),
    /// The point landed near the start vertex; a copy of vertex 0 was
    /// appended and the ring is now closed.
    Closed,
    /// The point landed near the start vertex but too few distinct vertices
    /// exist to form a polygon. The path is unchanged.
    Rejected,
}

/// Feed one logical point into the path.
///
/// Closure is decided purely by distance to the start vertex (inclusive
/// boundary). The closing vertex is an exact copy of vertex 0, never the
/// clicked point, so the ring is exact regardless of click precision.
pub fn capture_point(path: &mut PolygonPath, candidate: Point, threshold: f64) -> CaptureOutcome {
    if let Some(start) = path.first() {
        if candidate.distance(start) <= threshold {
            if path.distinct_count() < 3 {
                return CaptureOutcome::Rejected;
            }
            path.push(start);
            return CaptureOutcome::Closed;
        }
    }

    path.push(candidate);
    CaptureOutcome::Appended(candidate)
}
