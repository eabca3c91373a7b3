//! Panel and toolbar frames.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, epaint::Shadow};

use crate::{sizing, theme};

fn floating_frame(blur: u8, shadow_alpha: u8, margin: Margin) -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(Shadow {
            spread: 0,
            blur,
            offset: [0, 2],
            color: Color32::from_black_alpha(shadow_alpha),
        })
        .inner_margin(margin)
}

/// Frame for floating panels such as the notification toast.
pub fn panel_frame() -> Frame {
    floating_frame(8, 15, Margin::symmetric(14, 10))
}

/// Frame for the toolbar strip.
pub fn toolbar_frame() -> Frame {
    floating_frame(6, 10, Margin::symmetric(12, 6))
}
