//! Reusable egui widget components.
//!
//! - **Buttons**: contained and outlined action buttons with color tones
//! - **Frames**: toolbar and panel frames
//! - **Toast**: transient notification bubble
//! - **Layout**: separators

pub mod buttons;
pub mod frames;
pub mod layout;
pub mod toast;

pub use buttons::{ActionButton, ButtonColors, ButtonTone, ButtonVariant};
pub use frames::{panel_frame, toolbar_frame};
pub use layout::vertical_separator;
pub use toast::{Toast, ToastKind};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Action button height
    pub const BUTTON_HEIGHT: f32 = 30.0;
    /// Horizontal padding inside action buttons
    pub const BUTTON_PADDING: f32 = 14.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Primary action color (blue)
    pub const PRIMARY: Color32 = Color32::from_rgb(25, 118, 210);
    /// Primary hover
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(21, 101, 192);
    /// Secondary action color (purple)
    pub const SECONDARY: Color32 = Color32::from_rgb(156, 39, 176);
    /// Secondary hover
    pub const SECONDARY_DARK: Color32 = Color32::from_rgb(123, 31, 162);
    /// Destructive action color (red)
    pub const ERROR: Color32 = Color32::from_rgb(211, 47, 47);
    /// Destructive hover
    pub const ERROR_DARK: Color32 = Color32::from_rgb(198, 40, 40);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
