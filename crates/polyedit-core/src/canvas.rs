//! In-process host surface.
//!
//! `CanvasSurface` keeps the pointer position, per-shape transient
//! transforms and the handle overlay, and routes pointer gestures to a
//! [`PolygonController`]. The app renders whatever it holds.

use std::collections::HashMap;

use kurbo::Point;

use crate::controller::{HitTarget, PolygonController};
use crate::input::{InputState, PointerEvent, PointerGesture};
use crate::selection::{HandleSet, ManipulationState};
use crate::surface::{ShapeId, Surface};
use crate::transform::ShapeTransform;

#[derive(Debug, Clone, Default)]
pub struct CanvasSurface {
    /// Pointer position in screen coordinates.
    pointer: Option<Point>,
    transforms: HashMap<ShapeId, ShapeTransform>,
    handles: HandleSet,
    /// Active move/resize gesture.
    manipulation: Option<ManipulationState>,
    input: InputState,
    needs_redraw: bool,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    pub fn set_shape_transform(&mut self, shape: ShapeId, transform: ShapeTransform) {
        if transform.is_identity() {
            self.transforms.remove(&shape);
        } else {
            self.transforms.insert(shape, transform);
        }
        self.needs_redraw = true;
    }

    /// Returns whether a redraw was requested since the last call, and clears
    /// the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn manipulation(&self) -> Option<&ManipulationState> {
        self.manipulation.as_ref()
    }

    pub fn is_manipulating(&self) -> bool {
        self.manipulation.is_some()
    }

    pub fn begin_manipulation(&mut self, state: ManipulationState) {
        log::debug!(
            "Begin {} on {}",
            if state.handle.is_some() { "resize" } else { "move" },
            state.shape_id
        );
        self.manipulation = Some(state);
    }

    /// Move the active gesture to `point` (logical coordinates).
    pub fn update_manipulation(&mut self, point: Point) {
        let Some(state) = self.manipulation.as_mut() else {
            return;
        };
        state.current_point = point;
        let (shape, transform) = (state.shape_id, state.transform());
        self.set_shape_transform(shape, transform);
    }

    /// Finish the active gesture. The shape keeps its transient transform
    /// until the controller bakes it.
    pub fn end_manipulation(&mut self) -> Option<ManipulationState> {
        self.manipulation.take()
    }

    /// Abandon the active gesture and drop its transform.
    pub fn cancel_manipulation(&mut self) {
        if let Some(state) = self.manipulation.take() {
            self.reset_transform(state.shape_id);
        }
    }

    /// Feed a raw pointer event through gesture recognition and on to the
    /// controller.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        controller: &mut PolygonController,
    ) -> Option<PointerGesture> {
        // A press while a gesture is still open means its release was lost.
        if matches!(event, PointerEvent::Down { .. }) && self.is_manipulating() {
            log::debug!("Press during an unfinished gesture; committing it");
            self.finish_manipulation(controller);
        }
        let gesture = self.input.handle_pointer_event(event);
        self.pointer = self.input.pointer_position();
        if let Some(gesture) = gesture {
            self.dispatch(gesture, controller);
        }
        gesture
    }

    /// End the active gesture where it last stood and bake its transform.
    fn finish_manipulation(&mut self, controller: &mut PolygonController) {
        if self.end_manipulation().is_some() {
            controller.transform_end(self);
        }
    }

    fn dispatch(&mut self, gesture: PointerGesture, controller: &mut PolygonController) {
        match gesture {
            PointerGesture::Hover(_) => {
                if controller.update_preview(&*self) {
                    self.request_redraw();
                }
            }
            PointerGesture::Click(position) => {
                if controller.is_drawing() {
                    controller.submit_point(self);
                } else if controller.hit_test(&*self, position) == Some(HitTarget::Shape) {
                    controller.toggle_selection(self);
                }
            }
            PointerGesture::DragStarted { origin, position } => {
                if controller.is_drawing() {
                    if controller.update_preview(&*self) {
                        self.request_redraw();
                    }
                    return;
                }
                let Some(target) = controller.hit_test(&*self, origin) else {
                    return;
                };
                let Some(bounds) = controller.transformed_path(&*self).bounds() else {
                    return;
                };
                let handle = match target {
                    HitTarget::Handle(corner) => Some(corner),
                    HitTarget::Shape => None,
                };
                let viewport = controller.viewport();
                self.begin_manipulation(ManipulationState::new(
                    controller.shape_id(),
                    handle,
                    viewport.to_logical(origin),
                    bounds,
                    controller.config().min_extent,
                ));
                self.update_manipulation(viewport.to_logical(position));
            }
            PointerGesture::Dragged(position) => {
                if self.is_manipulating() {
                    let logical = controller.viewport().to_logical(position);
                    self.update_manipulation(logical);
                } else if controller.update_preview(&*self) {
                    self.request_redraw();
                }
            }
            PointerGesture::DragEnded(position) => {
                if self.is_manipulating() {
                    let logical = controller.viewport().to_logical(position);
                    self.update_manipulation(logical);
                    self.finish_manipulation(controller);
                } else if controller.is_drawing() {
                    // A sloppy click while drawing still places a vertex.
                    controller.submit_point(self);
                }
            }
            PointerGesture::Exited => {
                if self.is_manipulating() {
                    log::debug!("Pointer left during a gesture; committing it");
                    self.finish_manipulation(controller);
                }
                controller.clear_preview();
                self.request_redraw();
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn shape_transform(&self, shape: ShapeId) -> ShapeTransform {
        self.transforms
            .get(&shape)
            .copied()
            .unwrap_or(ShapeTransform::IDENTITY)
    }

    fn reset_transform(&mut self, shape: ShapeId) {
        self.transforms.remove(&shape);
        self.needs_redraw = true;
    }

    fn handles(&self) -> &HandleSet {
        &self.handles
    }

    fn attach_handles(&mut self, shape: ShapeId) {
        self.handles.attach(shape);
    }

    fn detach_handles(&mut self) {
        self.handles.clear();
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}
