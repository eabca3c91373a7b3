//! Pointer input state: turns raw press/move/release events into clicks
//! and drags.

use std::collections::HashSet;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Movement (screen pixels) below which a press-release pair is a click.
pub const CLICK_TOLERANCE: f64 = 4.0;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Raw pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
    /// The pointer left the surface.
    Left,
}

/// A recognized primary-button gesture, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    /// Pointer moved with no button held.
    Hover(Point),
    /// Press and release without leaving the click tolerance.
    Click(Point),
    /// The pointer left the click tolerance while pressed.
    DragStarted { origin: Point, position: Point },
    /// Subsequent movement of a drag.
    Dragged(Point),
    /// Release at the end of a drag.
    DragEnded(Point),
    /// The pointer left the surface.
    Exited,
}

/// Tracks the current input state across events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in screen coordinates, if over the surface.
    pointer_position: Option<Point>,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Where the primary button went down.
    press_origin: Option<Point>,
    /// Whether the current press has turned into a drag.
    is_dragging: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer_position
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Process a pointer event, returning the gesture it completes (if any).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<PointerGesture> {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = Some(position);
                self.pressed_buttons.insert(button);
                if button == MouseButton::Left {
                    self.press_origin = Some(position);
                    self.is_dragging = false;
                }
                None
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = Some(position);
                self.pressed_buttons.remove(&button);
                if button != MouseButton::Left {
                    return None;
                }
                let origin = self.press_origin.take()?;
                if std::mem::take(&mut self.is_dragging) {
                    Some(PointerGesture::DragEnded(position))
                } else {
                    // Released without a Move past the tolerance: still a
                    // click if the release itself stayed close.
                    if origin.distance(position) <= CLICK_TOLERANCE {
                        Some(PointerGesture::Click(position))
                    } else {
                        None
                    }
                }
            }
            PointerEvent::Move { position } => {
                self.pointer_position = Some(position);
                match self.press_origin {
                    Some(_) if self.is_dragging => Some(PointerGesture::Dragged(position)),
                    Some(origin) if origin.distance(position) > CLICK_TOLERANCE => {
                        self.is_dragging = true;
                        Some(PointerGesture::DragStarted { origin, position })
                    }
                    Some(_) => None,
                    None => Some(PointerGesture::Hover(position)),
                }
            }
            PointerEvent::Left => {
                self.pointer_position = None;
                Some(PointerGesture::Exited)
            }
        }
    }
}
