//! Viewport sizing: converts between the stored logical frame and the
//! current container size.

use kurbo::{Affine, Point, Size};
use serde::{Deserialize, Serialize};

use crate::error::ViewportError;

/// Per-axis factors converting logical coordinates to screen coordinates.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportScale {
    pub x: f64,
    pub y: f64,
}

impl Default for ViewportScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportScale {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Logical -> screen.
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(point.x * self.x, point.y * self.y)
    }

    /// Screen -> logical.
    pub fn to_logical(&self, point: Point) -> Point {
        Point::new(point.x / self.x, point.y / self.y)
    }

    /// The logical -> screen transform, for composing with shape transforms.
    pub fn affine(&self) -> Affine {
        Affine::scale_non_uniform(self.x, self.y)
    }
}

/// Tracks the container size and derives the [`ViewportScale`].
///
/// The scale is always computed against the fixed reference frame, so it is
/// recomputed on every resize rather than multiplied into the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSizer {
    /// Logical frame size the polygon is stored in.
    reference: Size,
    /// Last recorded container size.
    stage: Size,
    /// Current scale.
    scale: ViewportScale,
}

impl ViewportSizer {
    /// Create a sizer whose stage starts at the reference size.
    pub fn new(reference: Size) -> Self {
        Self {
            reference,
            stage: reference,
            scale: ViewportScale::IDENTITY,
        }
    }

    /// Record a new container size and recompute the scale.
    ///
    /// A zero, negative or non-finite extent keeps the previous scale and
    /// stage size.
    pub fn resize(&mut self, size: Size) -> Result<ViewportScale, ViewportError> {
        if !has_extent(size) {
            log::warn!(
                "Ignoring resize to {}x{}; keeping scale ({}, {})",
                size.width,
                size.height,
                self.scale.x,
                self.scale.y
            );
            return Err(ViewportError::ZeroExtent {
                width: size.width,
                height: size.height,
            });
        }

        self.scale = ViewportScale::new(
            size.width / self.reference.width,
            size.height / self.reference.height,
        );
        self.stage = size;
        log::debug!(
            "Viewport {}x{} -> scale ({:.4}, {:.4})",
            size.width,
            size.height,
            self.scale.x,
            self.scale.y
        );
        Ok(self.scale)
    }

    pub fn scale(&self) -> ViewportScale {
        self.scale
    }

    pub fn reference(&self) -> Size {
        self.reference
    }

    /// Last recorded container size.
    pub fn stage(&self) -> Size {
        self.stage
    }

    /// Convert a logical point to screen space.
    pub fn to_screen(&self, point: Point) -> Point {
        self.scale.to_screen(point)
    }

    /// Convert a screen point to logical space.
    pub fn to_logical(&self, point: Point) -> Point {
        self.scale.to_logical(point)
    }

    /// Convert a run of logical points to screen space.
    pub fn scale_path(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.to_screen(p)).collect()
    }
}

fn has_extent(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_identity() {
        let sizer = ViewportSizer::new(Size::new(800.0, 500.0));
        assert_eq!(sizer.scale(), ViewportScale::IDENTITY);
        assert_eq!(sizer.stage(), Size::new(800.0, 500.0));
    }

    #[test]
    fn test_half_size_renders_half_coordinates() {
        let mut sizer = ViewportSizer::new(Size::new(800.0, 500.0));
        let scale = sizer.resize(Size::new(400.0, 250.0)).unwrap();

        assert!((scale.x - 0.5).abs() < f64::EPSILON);
        assert!((scale.y - 0.5).abs() < f64::EPSILON);
        assert_eq!(sizer.to_screen(Point::new(100.0, 100.0)), Point::new(50.0, 50.0));
        assert_eq!(sizer.stage(), Size::new(400.0, 250.0));
    }

    #[test]
    fn test_unit_scale_is_identity() {
        let mut sizer = ViewportSizer::new(Size::new(800.0, 500.0));
        sizer.resize(Size::new(800.0, 500.0)).unwrap();

        let points = [Point::new(12.5, 99.0), Point::new(-3.0, 1e6)];
        assert_eq!(sizer.scale_path(&points), points.to_vec());
        assert_eq!(sizer.to_logical(points[0]), points[0]);
    }

    #[test]
    fn test_scale_is_recomputed_not_accumulated() {
        let mut sizer = ViewportSizer::new(Size::new(800.0, 500.0));
        sizer.resize(Size::new(400.0, 250.0)).unwrap();
        sizer.resize(Size::new(400.0, 250.0)).unwrap();
        let scale = sizer.resize(Size::new(1600.0, 1000.0)).unwrap();

        assert!((scale.x - 2.0).abs() < f64::EPSILON);
        assert!((scale.y - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_extent_keeps_previous_scale() {
        let mut sizer = ViewportSizer::new(Size::new(800.0, 500.0));
        sizer.resize(Size::new(400.0, 500.0)).unwrap();

        let err = sizer.resize(Size::new(0.0, 300.0)).unwrap_err();
        assert_eq!(err, ViewportError::ZeroExtent { width: 0.0, height: 300.0 });
        assert!((sizer.scale().x - 0.5).abs() < f64::EPSILON);
        assert!((sizer.scale().y - 1.0).abs() < f64::EPSILON);
        assert_eq!(sizer.stage(), Size::new(400.0, 500.0));

        assert!(sizer.resize(Size::new(f64::NAN, 10.0)).is_err());
        assert!(sizer.scale().x.is_finite());
    }

    #[test]
    fn test_non_uniform_roundtrip() {
        let mut sizer = ViewportSizer::new(Size::new(800.0, 500.0));
        sizer.resize(Size::new(1200.0, 400.0)).unwrap();

        let logical = Point::new(123.0, 456.0);
        let back = sizer.to_logical(sizer.to_screen(logical));
        assert!((back.x - logical.x).abs() < 1e-10);
        assert!((back.y - logical.y).abs() < 1e-10);
    }
}
