//! Global keyboard shortcuts.

/// A key press as delivered by a `keydown` listener.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// The `key` value, e.g. `"T"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + Shift + T by default.
    CycleAll,
    /// Ctrl/Cmd + Shift + D by default.
    CycleDark,
}

/// Result of offering a key press to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The shortcut ran; the caller must suppress the browser default.
    Handled(Shortcut),
    Ignored,
}

impl KeyOutcome {
    pub fn prevent_default(self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }
}

/// Maps key presses to [`Shortcut`]s.
///
/// Both bindings require Shift plus Ctrl or Meta (Cmd on macOS). Keys
/// compare case-insensitively, so `"t"` matches as well as the `"T"`
/// browsers usually report with Shift held. A plain page script that
/// compares `e.key === 'T'` would ignore the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutBindings {
    pub cycle_all: char,
    pub cycle_dark: char,
}

impl Default for ShortcutBindings {
    fn default() -> Self {
        Self {
            cycle_all: 'T',
            cycle_dark: 'D',
        }
    }
}

impl ShortcutBindings {
    pub fn resolve(&self, event: &KeyEvent) -> Option<Shortcut> {
        if !(event.ctrl || event.meta) || !event.shift {
            return None;
        }
        let mut chars = event.key.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if key.eq_ignore_ascii_case(&self.cycle_all) {
            Some(Shortcut::CycleAll)
        } else if key.eq_ignore_ascii_case(&self.cycle_dark) {
            Some(Shortcut::CycleDark)
        } else {
            None
        }
    }

    /// Human-readable binding list for the startup banner.
    pub fn describe(&self) -> [String; 2] {
        [
            format!("Ctrl/Cmd + Shift + {}: Cycle all themes", self.cycle_all),
            format!("Ctrl/Cmd + Shift + {}: Cycle dark themes only", self.cycle_dark),
        ]
    }
}
