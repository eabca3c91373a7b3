//! Keyboard shortcut registry.

use crate::ui::UiAction;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub action: UiAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, action: UiAction, description: &'static str) -> Self {
        Self {
            key,
            ctrl,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+E").
    pub fn format(&self) -> String {
        if self.ctrl {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_string()
        }
    }

    fn matches(&self, key: &str, ctrl: bool) -> bool {
        self.ctrl == ctrl && self.key.eq_ignore_ascii_case(key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("D", false, UiAction::ToggleDrawing, "Start/stop drawing"),
            Shortcut::new("R", false, UiAction::Reset, "Reset polygon"),
            Shortcut::new("E", true, UiAction::Export, "Copy points to clipboard"),
            Shortcut::new("Escape", false, UiAction::Deselect, "Hide resize handles"),
        ]
    }

    /// Find the action bound to a key. `key` is a character ("d") or a
    /// named key ("Escape"); matching ignores ASCII case.
    pub fn lookup(key: &str, ctrl: bool) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, ctrl))
            .map(|shortcut| shortcut.action)
    }

    /// Log all shortcuts.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {:10} {}", shortcut.format(), shortcut.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(ShortcutRegistry::lookup("d", false), Some(UiAction::ToggleDrawing));
        assert_eq!(ShortcutRegistry::lookup("D", false), Some(UiAction::ToggleDrawing));
        assert_eq!(ShortcutRegistry::lookup("escape", false), Some(UiAction::Deselect));
    }

    #[test]
    fn test_lookup_respects_ctrl() {
        assert_eq!(ShortcutRegistry::lookup("e", true), Some(UiAction::Export));
        assert_eq!(ShortcutRegistry::lookup("e", false), None);
        assert_eq!(ShortcutRegistry::lookup("r", true), None);
    }

    #[test]
    fn test_format() {
        let formatted: Vec<String> = ShortcutRegistry::all().iter().map(Shortcut::format).collect();
        assert_eq!(formatted, vec!["D", "R", "Ctrl+E", "Escape"]);
    }

    #[test]
    fn test_no_duplicate_bindings() {
        let all = ShortcutRegistry::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!(a.ctrl == b.ctrl && a.key.eq_ignore_ascii_case(b.key)));
            }
        }
    }
}
