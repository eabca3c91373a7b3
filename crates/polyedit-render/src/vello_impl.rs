//! Vello-based renderer implementation.

use kurbo::{Affine, Stroke};
use peniko::Fill;
use vello::Scene;

use crate::layers::{Paint, PolygonLayers};
use crate::renderer::{RenderContext, Renderer};

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the built scene, leaving an empty one behind.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        let transform = Affine::scale(ctx.scale_factor);
        let layers = PolygonLayers::build(ctx.input, &ctx.style);
        if layers.is_empty() {
            log::trace!("Empty stage, nothing to draw");
            return;
        }

        let stage = ctx.stage();
        let mut drawn = 0;
        for op in layers.visible(stage) {
            drawn += 1;
            match op.paint {
                Paint::Fill(color) => {
                    self.scene.fill(Fill::NonZero, transform, color, None, &op.path);
                }
                Paint::Stroke { color, width } => {
                    self.scene.stroke(&Stroke::new(width), transform, color, None, &op.path);
                }
            }
        }
        if drawn < layers.ops().len() {
            log::debug!(
                "Culled {} of {} draw ops outside {}x{} stage",
                layers.ops().len() - drawn,
                layers.ops().len(),
                stage.width(),
                stage.height()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use polyedit_core::{RenderInput, ViewportScale};

    fn frame(drawing: bool) -> RenderInput {
        RenderInput {
            drawing,
            path: vec![
                Point::new(100.0, 100.0),
                Point::new(200.0, 100.0),
                Point::new(200.0, 200.0),
                Point::new(100.0, 100.0),
            ],
            preview: drawing.then(|| Point::new(150.0, 250.0)),
            selected: false,
            bounds: None,
            handles: Vec::new(),
            scale: ViewportScale::IDENTITY,
        }
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_while_drawing() {
        let mut renderer = VelloRenderer::new();
        let input = frame(true);
        let ctx = RenderContext::new(&input, Size::new(800.0, 500.0));

        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_take_scene_leaves_empty() {
        let mut renderer = VelloRenderer::new();
        let input = frame(false);
        let ctx = RenderContext::new(&input, Size::new(800.0, 500.0)).with_scale_factor(2.0);

        renderer.build_scene(&ctx);
        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_shape_off_stage_encodes_nothing() {
        let mut renderer = VelloRenderer::new();
        let input = frame(false);
        let ctx = RenderContext::new(&input, Size::new(50.0, 50.0));

        renderer.build_scene(&ctx);
        assert!(renderer.scene().encoding().is_empty());
    }
}
