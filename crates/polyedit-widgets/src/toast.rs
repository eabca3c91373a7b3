//! Transient notification bubble anchored to the bottom of the screen.

use std::time::Duration;

use egui::{Align2, Color32, Context, RichText};

use crate::{frames::panel_frame, theme};

/// How long a toast stays up unless overridden.
pub const DEFAULT_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn color(self) -> Color32 {
        match self {
            ToastKind::Info => theme::TEXT,
            ToastKind::Success => theme::SUCCESS,
            ToastKind::Error => theme::ERROR,
        }
    }
}

/// A message with a remaining lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    remaining: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            remaining: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.remaining = ttl;
        self
    }

    /// Advance the clock. Returns false once the toast has expired.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        !self.remaining.is_zero()
    }

    pub fn show(&self, ctx: &Context) {
        egui::Area::new(egui::Id::new("notice_toast"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
            .interactable(false)
            .show(ctx, |ui| {
                panel_frame().show(ui, |ui| {
                    ui.label(RichText::new(&self.message).size(13.0).color(self.kind.color()));
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires() {
        let mut toast = Toast::new(ToastKind::Success, "done").with_ttl(Duration::from_millis(100));
        assert!(toast.tick(Duration::from_millis(60)));
        assert!(!toast.tick(Duration::from_millis(60)));
    }

    #[test]
    fn test_error_toast_is_red() {
        assert_eq!(ToastKind::Error.color(), theme::ERROR);
    }
}
