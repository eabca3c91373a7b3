//! PolyEdit Application
//!
//! Native shell around the polygon controller: windowing, GPU rendering,
//! the egui toolbar and clipboard export.

#[cfg(feature = "native")]
mod app;
mod clipboard;
mod config;
mod event_handler;
mod shortcuts;
mod ui;

#[cfg(feature = "native")]
pub use app::App;
pub use clipboard::SystemClipboard;
pub use config::{AppConfig, CONFIG_ENV, parse_color};
pub use event_handler::{EventHandler, apply_action};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
