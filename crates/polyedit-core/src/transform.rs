//! Transient shape transforms and baking them into vertex data.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::polygon::PolygonPath;

/// Scale-then-translate transform applied to the shape node while the user
/// drags or resizes it. Expressed in logical units, relative to the shape's
/// own origin. Rotation is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeTransform {
    pub scale: Vec2,
    pub translation: Vec2,
}

impl Default for ShapeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ShapeTransform {
    pub const IDENTITY: Self = Self {
        scale: Vec2::new(1.0, 1.0),
        translation: Vec2::ZERO,
    };

    pub fn new(scale: Vec2, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// A pure move.
    pub fn translate(translation: Vec2) -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
            translation,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Map a point: `x * sx + tx`, `y * sy + ty`.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale.x + self.translation.x,
            point.y * self.scale.y + self.translation.y,
        )
    }

    /// Equivalent affine, for renderers.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

/// Fold a transform into the vertices, producing a replacement path.
///
/// The caller resets the shape's own transform to identity afterwards, so
/// the next gesture starts from a fresh transform instead of accumulating
/// drift.
pub fn bake_transform(path: &PolygonPath, transform: ShapeTransform) -> PolygonPath {
    PolygonPath::from_points(path.points().iter().map(|&p| transform.apply(p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_bake_is_noop() {
        let path = PolygonPath::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0, 2.0]).unwrap();
        assert_eq!(bake_transform(&path, ShapeTransform::IDENTITY), path);
    }

    #[test]
    fn test_bake_formula_per_axis() {
        let path = PolygonPath::from_flat(&[
            100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0, 100.0, 100.0,
        ])
        .unwrap();
        let transform = ShapeTransform::new(Vec2::new(1.5, 0.5), Vec2::new(-20.0, 35.0));

        let baked = bake_transform(&path, transform);
        let before = path.to_flat();
        let after = baked.to_flat();
        assert_eq!(before.len(), after.len());
        for i in 0..before.len() / 2 {
            assert_eq!(after[2 * i], before[2 * i] * 1.5 - 20.0);
            assert_eq!(after[2 * i + 1], before[2 * i + 1] * 0.5 + 35.0);
        }
        assert!(baked.is_closed());
    }

    #[test]
    fn test_affine_matches_apply() {
        let transform = ShapeTransform::new(Vec2::new(2.0, 3.0), Vec2::new(10.0, -5.0));
        let p = Point::new(7.0, 11.0);
        let via_affine = transform.affine() * p;
        let direct = transform.apply(p);
        assert!((via_affine.x - direct.x).abs() < 1e-12);
        assert!((via_affine.y - direct.y).abs() < 1e-12);
    }

    #[test]
    fn test_translate_constructor() {
        let t = ShapeTransform::translate(Vec2::new(4.0, 5.0));
        assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(5.0, 6.0));
        assert!(!t.is_identity());
        assert!(ShapeTransform::default().is_identity());
    }
}
