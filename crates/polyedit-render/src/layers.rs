//! Backend-independent draw list for the polygon stage.
//!
//! Everything here is in screen coordinates; a backend only has to apply
//! the device scale factor.

use kurbo::{BezPath, Circle, Point, Rect, Shape as _};
use peniko::Color;
use polyedit_core::RenderInput;
use polyedit_core::polygon::path_through;

/// Which stage layer a draw operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Dot on the first vertex while drawing.
    StartMarker,
    /// Faint fill through all vertices and the cursor.
    PreviewFill,
    /// The polygon itself.
    Polygon,
    /// Polyline from the vertices to the cursor.
    PreviewSegment,
    /// Outline around the selected shape.
    SelectionBox,
    /// Resize handle square.
    Handle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke { color: Color, width: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub layer: LayerKind,
    pub path: BezPath,
    pub paint: Paint,
}

impl DrawOp {
    /// Area the op can touch, including half the stroke width.
    pub fn bounds(&self) -> Rect {
        let bounds = self.path.bounding_box();
        match self.paint {
            Paint::Fill(_) => bounds,
            Paint::Stroke { width, .. } => bounds.inflate(width / 2.0, width / 2.0),
        }
    }

    /// Edge contact counts; a flat segment has a zero-area box.
    pub fn touches(&self, stage: Rect) -> bool {
        let b = self.bounds();
        b.x0 <= stage.x1 && b.x1 >= stage.x0 && b.y0 <= stage.y1 && b.y1 >= stage.y0
    }
}

/// Colors and sizes of the stage layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub stroke: Color,
    pub closed_fill: Color,
    pub preview_fill: Color,
    pub marker: Color,
    pub selection: Color,
    pub stroke_width: f64,
    pub preview_stroke_width: f64,
    pub preview_fill_stroke_width: f64,
    pub marker_radius: f64,
    /// Handle square side in screen pixels.
    pub handle_size: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            stroke: Color::from_rgb8(0x00, 0x80, 0x80),
            closed_fill: Color::from_rgb8(230, 255, 250).with_alpha(0.5),
            preview_fill: Color::from_rgb8(230, 255, 250).with_alpha(0.3),
            marker: Color::from_rgb8(0xB2, 0x00, 0x00),
            selection: Color::from_rgb8(0, 161, 255),
            stroke_width: 2.0,
            preview_stroke_width: 1.0,
            preview_fill_stroke_width: 0.2,
            marker_radius: 6.0,
            handle_size: 10.0,
        }
    }
}

impl LayerStyle {
    pub fn with_handle_size(mut self, size: f64) -> Self {
        self.handle_size = size;
        self
    }
}

/// Ordered draw operations for one frame.
#[derive(Debug, Clone, Default)]
pub struct PolygonLayers {
    ops: Vec<DrawOp>,
}

impl PolygonLayers {
    pub fn build(input: &RenderInput, style: &LayerStyle) -> Self {
        let mut layers = Self::default();
        let drawing = input.drawing;
        let path = &input.path;

        if let Some(start) = input.start_marker() {
            let circle = Circle::new(start, style.marker_radius).to_path(0.1);
            layers.push(LayerKind::StartMarker, circle, Paint::Fill(style.marker));
        }

        let preview_run = match input.preview {
            Some(cursor) if drawing && !path.is_empty() => Some(with_cursor(path, cursor)),
            _ => None,
        };

        if let Some(run) = &preview_run {
            let shape = path_through(run, true);
            layers.push(LayerKind::PreviewFill, shape.clone(), Paint::Fill(style.preview_fill));
            layers.push(
                LayerKind::PreviewFill,
                shape,
                Paint::Stroke { color: style.stroke, width: style.preview_fill_stroke_width },
            );
        }

        if drawing {
            if path.len() >= 2 {
                layers.push(
                    LayerKind::Polygon,
                    path_through(path, false),
                    Paint::Stroke { color: style.stroke, width: style.stroke_width },
                );
            }
        } else if !path.is_empty() {
            let ring = path_through(path, true);
            layers.push(LayerKind::Polygon, ring.clone(), Paint::Fill(style.closed_fill));
            layers.push(
                LayerKind::Polygon,
                ring,
                Paint::Stroke { color: style.stroke, width: style.stroke_width },
            );
        }

        if let Some(run) = &preview_run {
            layers.push(
                LayerKind::PreviewSegment,
                path_through(run, false),
                Paint::Stroke { color: style.stroke, width: style.preview_stroke_width },
            );
        }

        if input.selected {
            if let Some(bounds) = input.bounds {
                layers.push(
                    LayerKind::SelectionBox,
                    bounds.to_path(0.1),
                    Paint::Stroke { color: style.selection, width: 1.0 },
                );
            }
            let half = style.handle_size / 2.0;
            for handle in &input.handles {
                let p = handle.position;
                let square = Rect::new(p.x - half, p.y - half, p.x + half, p.y + half).to_path(0.1);
                layers.push(LayerKind::Handle, square.clone(), Paint::Fill(Color::WHITE));
                layers.push(
                    LayerKind::Handle,
                    square,
                    Paint::Stroke { color: style.selection, width: 1.0 },
                );
            }
        }

        layers
    }

    fn push(&mut self, layer: LayerKind, path: BezPath, paint: Paint) {
        self.ops.push(DrawOp { layer, path, paint });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Ops that reach into `stage`, in draw order.
    pub fn visible(&self, stage: Rect) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops.iter().filter(move |op| op.touches(stage))
    }

    /// Layer of each op, with consecutive repeats collapsed.
    pub fn layer_order(&self) -> Vec<LayerKind> {
        let mut order: Vec<LayerKind> = Vec::new();
        for op in &self.ops {
            if order.last() != Some(&op.layer) {
                order.push(op.layer);
            }
        }
        order
    }
}

fn with_cursor(path: &[Point], cursor: Point) -> Vec<Point> {
    let mut run = Vec::with_capacity(path.len() + 1);
    run.extend_from_slice(path);
    run.push(cursor);
    run
}
