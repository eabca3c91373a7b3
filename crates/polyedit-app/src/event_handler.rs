//! Translation of window input into controller calls.

use kurbo::Point;
use polyedit_core::{
    CanvasSurface, ClipboardSink, ModeChange, MouseButton, Notice, PointerEvent, PolygonController,
    Surface,
};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton};

use crate::ui::UiAction;

/// Converts winit pointer input into logical-pixel pointer events.
#[derive(Debug, Default)]
pub struct EventHandler {
    /// Last cursor position in logical pixels. Kept after the pointer
    /// leaves so a release outside the window still lands somewhere.
    cursor: Option<Point>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>, scale_factor: f64) -> PointerEvent {
        let logical = position.to_logical::<f64>(scale_factor);
        let point = Point::new(logical.x, logical.y);
        self.cursor = Some(point);
        PointerEvent::Move { position: point }
    }

    /// Button press/release at the last known cursor position.
    pub fn mouse_input(&self, state: ElementState, button: WinitButton) -> Option<PointerEvent> {
        let button = match button {
            WinitButton::Left => MouseButton::Left,
            WinitButton::Right => MouseButton::Right,
            WinitButton::Middle => MouseButton::Middle,
            _ => return None,
        };
        let position = self.cursor?;
        Some(match state {
            ElementState::Pressed => PointerEvent::Down { position, button },
            ElementState::Released => PointerEvent::Up { position, button },
        })
    }

    pub fn cursor_left(&self) -> PointerEvent {
        PointerEvent::Left
    }
}

/// Run a toolbar or keyboard command against the controller.
///
/// Returns a notice to show the user, if the command produced one.
pub fn apply_action(
    action: UiAction,
    controller: &mut PolygonController,
    canvas: &mut CanvasSurface,
    clipboard: &mut impl ClipboardSink,
) -> Option<Notice> {
    match action {
        UiAction::ToggleDrawing => match controller.toggle_drawing_mode() {
            ModeChange::Changed { drawing } => {
                if drawing {
                    canvas.detach_handles();
                }
                canvas.request_redraw();
                None
            }
            ModeChange::Refused(reason) => Some(Notice::info(reason)),
        },
        UiAction::Reset => {
            canvas.cancel_manipulation();
            canvas.detach_handles();
            controller.reset();
            canvas.request_redraw();
            None
        }
        UiAction::Export => match controller.export_path(clipboard) {
            Ok(notice) => Some(notice),
            Err(e) => Some(Notice::error(format!("Could not copy points: {}", e))),
        },
        UiAction::Deselect => {
            if controller.is_selected(&*canvas) {
                controller.toggle_selection(canvas);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use polyedit_core::{ClipboardError, MemoryClipboard, NoticeKind};

    fn click(canvas: &mut CanvasSurface, controller: &mut PolygonController, handler: &mut EventHandler, x: f64, y: f64) {
        let moved = handler.cursor_moved(PhysicalPosition::new(x, y), 1.0);
        canvas.handle_pointer_event(moved, controller);
        for state in [ElementState::Pressed, ElementState::Released] {
            if let Some(event) = handler.mouse_input(state, WinitButton::Left) {
                canvas.handle_pointer_event(event, controller);
            }
        }
    }

    fn closed_square() -> (PolygonController, CanvasSurface) {
        let mut controller = PolygonController::default();
        controller.activate(Size::new(800.0, 500.0));
        let mut canvas = CanvasSurface::new();
        let mut handler = EventHandler::new();
        let mut clipboard = MemoryClipboard::new();
        apply_action(UiAction::ToggleDrawing, &mut controller, &mut canvas, &mut clipboard);
        for (x, y) in [(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0), (101.0, 101.0)] {
            click(&mut canvas, &mut controller, &mut handler, x, y);
        }
        (controller, canvas)
    }

    #[test]
    fn test_cursor_is_converted_to_logical_pixels() {
        let mut handler = EventHandler::new();
        let event = handler.cursor_moved(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(event, PointerEvent::Move { position: Point::new(100.0, 50.0) });
        assert_eq!(
            handler.mouse_input(ElementState::Pressed, WinitButton::Left),
            Some(PointerEvent::Down { position: Point::new(100.0, 50.0), button: MouseButton::Left })
        );
    }

    #[test]
    fn test_button_before_any_cursor_is_dropped() {
        let handler = EventHandler::new();
        assert_eq!(handler.mouse_input(ElementState::Pressed, WinitButton::Left), None);
    }

    #[test]
    fn test_release_after_leaving_uses_last_position() {
        let mut handler = EventHandler::new();
        handler.cursor_moved(PhysicalPosition::new(40.0, 30.0), 1.0);
        assert_eq!(handler.cursor_left(), PointerEvent::Left);
        assert_eq!(
            handler.mouse_input(ElementState::Released, WinitButton::Left),
            Some(PointerEvent::Up { position: Point::new(40.0, 30.0), button: MouseButton::Left })
        );
    }

    #[test]
    fn test_drag_released_outside_window_is_baked() {
        let (mut controller, mut canvas) = closed_square();
        let mut handler = EventHandler::new();

        let events = [
            Some(handler.cursor_moved(PhysicalPosition::new(150.0, 150.0), 1.0)),
            handler.mouse_input(ElementState::Pressed, WinitButton::Left),
            Some(handler.cursor_moved(PhysicalPosition::new(190.0, 150.0), 1.0)),
            Some(handler.cursor_left()),
            handler.mouse_input(ElementState::Released, WinitButton::Left),
        ];
        for event in events.into_iter().flatten() {
            canvas.handle_pointer_event(event, &mut controller);
        }

        assert!(!canvas.is_manipulating());
        assert_eq!(controller.path().first(), Some(Point::new(140.0, 100.0)));
        assert!(canvas.shape_transform(controller.shape_id()).is_identity());
    }

    #[test]
    fn test_clicks_through_window_events_close_polygon() {
        let (controller, _) = closed_square();
        assert!(!controller.is_drawing());
        assert_eq!(controller.path().last(), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_export_action_reports_success() {
        let (mut controller, mut canvas) = closed_square();
        let mut clipboard = MemoryClipboard::new();

        let notice = apply_action(UiAction::Export, &mut controller, &mut canvas, &mut clipboard).unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Polygon points copied to clipboard!");
        assert!(clipboard.contents().unwrap().starts_with("[100.0,100.0"));
    }

    #[test]
    fn test_export_failure_becomes_error_notice() {
        let (mut controller, mut canvas) = closed_square();
        let mut clipboard = MemoryClipboard::failing(ClipboardError::Unavailable("no display".into()));

        let notice = apply_action(UiAction::Export, &mut controller, &mut canvas, &mut clipboard).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_reset_detaches_handles() {
        let (mut controller, mut canvas) = closed_square();
        let mut clipboard = MemoryClipboard::new();
        controller.toggle_selection(&mut canvas);
        assert!(!canvas.handles().is_empty());

        apply_action(UiAction::Reset, &mut controller, &mut canvas, &mut clipboard);
        assert!(canvas.handles().is_empty());
        assert!(controller.is_drawing());
        assert!(controller.path().is_empty());
    }

    #[test]
    fn test_refused_toggle_becomes_info_notice() {
        let (mut controller, mut canvas) = closed_square();
        let mut clipboard = MemoryClipboard::new();

        let notice = apply_action(UiAction::ToggleDrawing, &mut controller, &mut canvas, &mut clipboard).unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(!controller.is_drawing());
    }

    #[test]
    fn test_deselect() {
        let (mut controller, mut canvas) = closed_square();
        let mut clipboard = MemoryClipboard::new();
        controller.toggle_selection(&mut canvas);

        apply_action(UiAction::Deselect, &mut controller, &mut canvas, &mut clipboard);
        assert!(!controller.is_selected(&canvas));
        apply_action(UiAction::Deselect, &mut controller, &mut canvas, &mut clipboard);
        assert!(!controller.is_selected(&canvas));
    }
}
