//! Selection handle overlay and move/resize gestures.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::surface::ShapeId;
use crate::transform::ShapeTransform;

/// Corner positions of the resize overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// This corner's position on a rectangle.
    pub fn of(self, bounds: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(bounds.x0, bounds.y0),
            Corner::TopRight => Point::new(bounds.x1, bounds.y0),
            Corner::BottomLeft => Point::new(bounds.x0, bounds.y1),
            Corner::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }

    /// The diagonally opposite corner, which stays fixed while resizing.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// A resize handle with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    pub fn new(position: Point, corner: Corner) -> Self {
        Self { position, corner }
    }

    /// Check if a point hits this handle. Both must be in the same space as
    /// `tolerance`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Corner handles for a bounding rectangle. No rotation handle.
pub fn corner_handles(bounds: Rect) -> Vec<Handle> {
    Corner::ALL
        .iter()
        .map(|&corner| Handle::new(corner.of(bounds), corner))
        .collect()
}

/// Find which corner handle (if any) is hit.
pub fn hit_test_handles(bounds: Rect, point: Point, tolerance: f64) -> Option<Corner> {
    corner_handles(bounds)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.corner)
}

/// Nodes the handle overlay is attached to. Empty means nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleSet {
    nodes: Vec<ShapeId>,
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to exactly one shape, replacing any previous node.
    pub fn attach(&mut self, shape: ShapeId) {
        self.nodes.clear();
        self.nodes.push(shape);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, shape: ShapeId) -> bool {
        self.nodes.contains(&shape)
    }

    pub fn nodes(&self) -> &[ShapeId] {
        &self.nodes
    }
}

/// State of an active move or resize gesture on the shape.
///
/// Points are in logical coordinates. The gesture only ever produces a
/// transient [`ShapeTransform`]; the vertices are untouched until the
/// transform is baked.
#[derive(Debug, Clone, PartialEq)]
pub struct ManipulationState {
    /// The shape being manipulated.
    pub shape_id: ShapeId,
    /// The corner being dragged (None = moving the whole shape).
    pub handle: Option<Corner>,
    /// Starting point of the drag.
    pub start_point: Point,
    /// Current point of the drag.
    pub current_point: Point,
    /// Shape bounds when the gesture began.
    pub original_bounds: Rect,
    /// Smallest width/height a resize may produce.
    pub min_extent: f64,
}

impl ManipulationState {
    pub fn new(
        shape_id: ShapeId,
        handle: Option<Corner>,
        start_point: Point,
        original_bounds: Rect,
        min_extent: f64,
    ) -> Self {
        Self {
            shape_id,
            handle,
            start_point,
            current_point: start_point,
            original_bounds,
            min_extent,
        }
    }

    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// The transform this gesture currently applies to the shape.
    pub fn transform(&self) -> ShapeTransform {
        let delta = self.delta();
        let Some(corner) = self.handle else {
            return ShapeTransform::translate(delta);
        };

        let bounds = self.original_bounds;
        let anchor = corner.opposite().of(bounds);
        let dragged = corner.of(bounds);

        let sx = axis_scale(dragged.x, anchor.x, delta.x, self.min_extent);
        let sy = axis_scale(dragged.y, anchor.y, delta.y, self.min_extent);

        // Scale about the anchor: p' = anchor + (p - anchor) * s.
        ShapeTransform::new(
            Vec2::new(sx, sy),
            Vec2::new(anchor.x * (1.0 - sx), anchor.y * (1.0 - sy)),
        )
    }
}

/// Scale factor along one axis when the dragged edge moves by `delta`.
/// The edge may not cross the anchor or shrink below `min_extent`.
fn axis_scale(dragged: f64, anchor: f64, delta: f64, min_extent: f64) -> f64 {
    let extent = (dragged - anchor).abs();
    if extent <= f64::EPSILON {
        return 1.0;
    }
    let direction = (dragged - anchor).signum();
    let new_extent = ((dragged + delta - anchor) * direction).max(min_extent);
    new_extent / extent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 200.0)
    }

    #[test]
    fn test_corner_handles() {
        let handles = corner_handles(bounds());
        assert_eq!(handles.len(), 4);
        assert_eq!(handles[0].corner, Corner::TopLeft);
        assert_eq!(handles[3].position, Point::new(200.0, 200.0));
    }

    #[test]
    fn test_handle_hit_test() {
        let handle = Handle::new(Point::new(50.0, 50.0), Corner::TopLeft);
        assert!(handle.hit_test(Point::new(50.0, 50.0), 10.0));
        assert!(handle.hit_test(Point::new(55.0, 55.0), 10.0));
        assert!(!handle.hit_test(Point::new(70.0, 70.0), 10.0));
    }

    #[test]
    fn test_hit_test_handles_finds_corner() {
        assert_eq!(
            hit_test_handles(bounds(), Point::new(198.0, 103.0), 5.0),
            Some(Corner::TopRight)
        );
        assert_eq!(hit_test_handles(bounds(), Point::new(150.0, 150.0), 5.0), None);
    }

    #[test]
    fn test_handle_set_holds_one_node() {
        let mut set = HandleSet::new();
        assert!(set.is_empty());

        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        set.attach(a);
        set.attach(b);
        assert_eq!(set.nodes(), &[b]);
        assert!(!set.contains(a));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_move_gesture_translates() {
        let mut state =
            ManipulationState::new(uuid::Uuid::new_v4(), None, Point::new(150.0, 150.0), bounds(), 4.0);
        state.current_point = Point::new(170.0, 140.0);

        let transform = state.transform();
        assert_eq!(transform, ShapeTransform::translate(Vec2::new(20.0, -10.0)));
    }

    #[test]
    fn test_corner_resize_keeps_anchor_fixed() {
        let mut state = ManipulationState::new(
            uuid::Uuid::new_v4(),
            Some(Corner::BottomRight),
            Point::new(200.0, 200.0),
            bounds(),
            4.0,
        );
        state.current_point = Point::new(300.0, 250.0);

        let transform = state.transform();
        assert!((transform.scale.x - 2.0).abs() < 1e-12);
        assert!((transform.scale.y - 1.5).abs() < 1e-12);

        let anchor = transform.apply(Point::new(100.0, 100.0));
        assert!((anchor.x - 100.0).abs() < 1e-9);
        assert!((anchor.y - 100.0).abs() < 1e-9);

        let corner = transform.apply(Point::new(200.0, 200.0));
        assert!((corner.x - 300.0).abs() < 1e-9);
        assert!((corner.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_left_resize() {
        let mut state = ManipulationState::new(
            uuid::Uuid::new_v4(),
            Some(Corner::TopLeft),
            Point::new(100.0, 100.0),
            bounds(),
            4.0,
        );
        state.current_point = Point::new(150.0, 50.0);

        let transform = state.transform();
        let moved = transform.apply(Point::new(100.0, 100.0));
        assert!((moved.x - 150.0).abs() < 1e-9);
        assert!((moved.y - 50.0).abs() < 1e-9);

        let anchor = transform.apply(Point::new(200.0, 200.0));
        assert!((anchor.x - 200.0).abs() < 1e-9);
        assert!((anchor.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_cannot_flip_or_collapse() {
        let mut state = ManipulationState::new(
            uuid::Uuid::new_v4(),
            Some(Corner::BottomRight),
            Point::new(200.0, 200.0),
            bounds(),
            4.0,
        );
        state.current_point = Point::new(0.0, 0.0);

        let transform = state.transform();
        assert!((transform.scale.x - 0.04).abs() < 1e-12);
        assert!((transform.scale.y - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_zero_width_bounds_do_not_scale() {
        let flat = Rect::new(10.0, 10.0, 10.0, 50.0);
        let mut state =
            ManipulationState::new(uuid::Uuid::new_v4(), Some(Corner::BottomRight), Point::new(10.0, 50.0), flat, 4.0);
        state.current_point = Point::new(40.0, 90.0);

        let transform = state.transform();
        assert!((transform.scale.x - 1.0).abs() < f64::EPSILON);
        assert!((transform.scale.y - 2.0).abs() < 1e-12);
    }
}
