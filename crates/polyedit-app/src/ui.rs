//! egui overlay: the command toolbar and the notice toast.

use std::time::Duration;

use egui::{Align2, Context, Vec2};
use polyedit_core::{Notice, NoticeKind};
use polyedit_widgets::{ActionButton, ButtonTone, Toast, ToastKind, toolbar_frame, vertical_separator};

/// Commands the user can trigger from the toolbar or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Start or stop capturing vertices.
    ToggleDrawing,
    /// Discard the polygon and start over.
    Reset,
    /// Copy the vertex list to the clipboard.
    Export,
    /// Hide the resize handles.
    Deselect,
}

/// UI-side state mirrored from the controller each frame.
#[derive(Debug, Default)]
pub struct UiState {
    /// Whether the controller is in drawing mode.
    pub drawing: bool,
    toast: Option<Toast>,
}

impl UiState {
    /// Show a notice as a toast, replacing any current one.
    pub fn notify(&mut self, notice: Notice) {
        let kind = match notice.kind {
            NoticeKind::Info => ToastKind::Info,
            NoticeKind::Success => ToastKind::Success,
            NoticeKind::Error => ToastKind::Error,
        };
        self.toast = Some(Toast::new(kind, notice.message));
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Age the toast; drops it once expired.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(toast) = &mut self.toast {
            if !toast.tick(elapsed) {
                self.toast = None;
            }
        }
    }
}

/// Label of the drawing-mode button.
pub fn drawing_label(drawing: bool) -> &'static str {
    if drawing { "Stop Drawing" } else { "Start Drawing" }
}

/// Tone of the drawing-mode button: secondary while drawing.
pub fn drawing_tone(drawing: bool) -> ButtonTone {
    if drawing { ButtonTone::Secondary } else { ButtonTone::Primary }
}

/// Render the UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let action = render_toolbar(ctx, ui_state);
    if let Some(toast) = ui_state.toast() {
        toast.show(ctx);
    }
    action
}

fn render_toolbar(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("toolbar"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            toolbar_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(8.0, 0.0);

                    if ActionButton::new(drawing_label(ui_state.drawing))
                        .tone(drawing_tone(ui_state.drawing))
                        .show(ui)
                    {
                        action = Some(UiAction::ToggleDrawing);
                    }
                    if ActionButton::new("Reset")
                        .outlined()
                        .tone(ButtonTone::Error)
                        .show(ui)
                    {
                        action = Some(UiAction::Reset);
                    }

                    vertical_separator(ui);

                    if ActionButton::new("Export Points")
                        .outlined()
                        .tooltip("Copy points to clipboard")
                        .show(ui)
                    {
                        action = Some(UiAction::Export);
                    }
                });
            });
        });

    action
}
