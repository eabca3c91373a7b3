//! Action buttons in two variants: contained (solid fill) and outlined.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Solid fill, white label.
    #[default]
    Contained,
    /// Transparent fill, colored border and label.
    Outlined,
}

/// Color family of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTone {
    #[default]
    Primary,
    /// Marks a mode that is currently on.
    Secondary,
    Error,
}

impl ButtonTone {
    fn base(self) -> Color32 {
        match self {
            ButtonTone::Primary => theme::PRIMARY,
            ButtonTone::Secondary => theme::SECONDARY,
            ButtonTone::Error => theme::ERROR,
        }
    }

    fn dark(self) -> Color32 {
        match self {
            ButtonTone::Primary => theme::PRIMARY_DARK,
            ButtonTone::Secondary => theme::SECONDARY_DARK,
            ButtonTone::Error => theme::ERROR_DARK,
        }
    }
}

/// Resolved paint for one button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub fill: Color32,
    pub border: Color32,
    pub text: Color32,
}

impl ButtonColors {
    pub fn resolve(variant: ButtonVariant, tone: ButtonTone, hovered: bool, enabled: bool) -> Self {
        if !enabled {
            return Self {
                fill: match variant {
                    ButtonVariant::Contained => Color32::from_gray(224),
                    ButtonVariant::Outlined => Color32::TRANSPARENT,
                },
                border: Color32::from_gray(210),
                text: Color32::from_gray(170),
            };
        }
        match variant {
            ButtonVariant::Contained => {
                let fill = if hovered { tone.dark() } else { tone.base() };
                Self { fill, border: fill, text: Color32::WHITE }
            }
            ButtonVariant::Outlined => Self {
                fill: if hovered {
                    tone.base().gamma_multiply(0.08)
                } else {
                    Color32::TRANSPARENT
                },
                border: tone.base().gamma_multiply(0.6),
                text: tone.base(),
            },
        }
    }
}

/// A labeled action button.
pub struct ActionButton<'a> {
    label: &'a str,
    variant: ButtonVariant,
    tone: ButtonTone,
    tooltip: Option<&'a str>,
    enabled: bool,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Contained,
            tone: ButtonTone::Primary,
            tooltip: None,
            enabled: true,
        }
    }

    pub fn outlined(mut self) -> Self {
        self.variant = ButtonVariant::Outlined;
        self
    }

    pub fn tone(mut self, tone: ButtonTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font = FontId::proportional(13.0);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_uppercase(),
            font.clone(),
            Color32::PLACEHOLDER,
        );
        let width = galley.size().x + sizing::BUTTON_PADDING * 2.0;
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(width, sizing::BUTTON_HEIGHT), sense);

        if ui.is_rect_visible(rect) {
            let colors =
                ButtonColors::resolve(self.variant, self.tone, response.hovered(), self.enabled);
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, colors.fill);
            if self.variant == ButtonVariant::Outlined {
                ui.painter().rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, colors.border),
                    StrokeKind::Inside,
                );
            }
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label.to_uppercase(),
                font,
                colors.text,
            );
        }

        let clicked = self.enabled && response.clicked();
        let response = if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand)
        } else {
            response
        };
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_uses_tone_fill() {
        let colors = ButtonColors::resolve(ButtonVariant::Contained, ButtonTone::Primary, false, true);
        assert_eq!(colors.fill, theme::PRIMARY);
        assert_eq!(colors.text, Color32::WHITE);

        let hovered = ButtonColors::resolve(ButtonVariant::Contained, ButtonTone::Primary, true, true);
        assert_eq!(hovered.fill, theme::PRIMARY_DARK);
    }

    #[test]
    fn test_outlined_error_is_transparent_with_red_label() {
        let colors = ButtonColors::resolve(ButtonVariant::Outlined, ButtonTone::Error, false, true);
        assert_eq!(colors.fill, Color32::TRANSPARENT);
        assert_eq!(colors.text, theme::ERROR);
    }

    #[test]
    fn test_secondary_contained() {
        let colors = ButtonColors::resolve(ButtonVariant::Contained, ButtonTone::Secondary, false, true);
        assert_eq!(colors.fill, theme::SECONDARY);
        let hovered = ButtonColors::resolve(ButtonVariant::Contained, ButtonTone::Secondary, true, true);
        assert_eq!(hovered.fill, theme::SECONDARY_DARK);
    }

    #[test]
    fn test_disabled_ignores_tone() {
        let a = ButtonColors::resolve(ButtonVariant::Contained, ButtonTone::Primary, true, false);
        let b = ButtonColors::resolve(ButtonVariant::Contained, ButtonTone::Error, false, false);
        assert_eq!(a, b);
    }
}
