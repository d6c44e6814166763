//! Single-letter preset shortcuts.
//!
//! Held Ctrl/Alt/Super suppresses matching entirely so browser- and
//! OS-level chords are never intercepted; Shift is part of the binding,
//! not a suppressor. Shortcuts are also inert while a text-entry element
//! has focus — the surface checks that before navigation runs.

use crate::input::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub shift: bool,
}

impl Shortcut {
    /// Parses `"M"` or `"Shift+M"` forms.
    pub fn parse(spec: &str) -> Option<Self> {
        let (shift, key_part) = match spec.strip_prefix("Shift+") {
            Some(rest) => (true, rest),
            None => (false, spec),
        };
        let mut chars = key_part.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self {
            key: key.to_ascii_uppercase(),
            shift,
        })
    }
}

#[derive(Debug)]
pub struct ShortcutMap<A> {
    entries: Vec<(Shortcut, A)>,
}

impl<A> Default for ShortcutMap<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> ShortcutMap<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, shortcut: Shortcut, action: A) {
        self.entries.push((shortcut, action));
    }

    pub fn bind_spec(&mut self, spec: &str, action: A) {
        if let Some(shortcut) = Shortcut::parse(spec) {
            self.bind(shortcut, action);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First matching action, or `None` when suppressed or unbound.
    pub fn resolve(&self, key: KeyEvent, text_entry_focused: bool) -> Option<&A> {
        if text_entry_focused {
            return None;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return None;
        }
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        let pressed = c.to_ascii_uppercase();
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        self.entries
            .iter()
            .find(|(shortcut, _)| shortcut.key == pressed && shortcut.shift == shift)
            .map(|(_, action)| action)
    }
}
