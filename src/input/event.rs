//! Engine-owned input events.
//!
//! The engine never consumes crossterm types directly; key and pointer
//! events are narrowed to these wrappers at the boundary so the state
//! machines stay host-agnostic.

use crossterm::event::{
    KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyModifiers as CrosstermKeyModifiers,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    /// Platform meta key (Cmd on macOS, Win elsewhere).
    pub const SUPER: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<CrosstermKeyEvent> for KeyEvent {
    fn from(event: CrosstermKeyEvent) -> Self {
        let code = match event.code {
            CrosstermKeyCode::Char(' ') => KeyCode::Char(' '),
            CrosstermKeyCode::Char(c) => KeyCode::Char(c),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::BackTab => KeyCode::BackTab,
            CrosstermKeyCode::Esc => KeyCode::Esc,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            _ => KeyCode::Unknown,
        };

        let mut modifiers = KeyModifiers::NONE;
        if event.modifiers.contains(CrosstermKeyModifiers::SHIFT) {
            modifiers |= KeyModifiers::SHIFT;
        }
        if event.modifiers.contains(CrosstermKeyModifiers::CONTROL) {
            modifiers |= KeyModifiers::CONTROL;
        }
        if event.modifiers.contains(CrosstermKeyModifiers::ALT) {
            modifiers |= KeyModifiers::ALT;
        }
        if event.modifiers.contains(CrosstermKeyModifiers::SUPER)
            || event.modifiers.contains(CrosstermKeyModifiers::META)
        {
            modifiers |= KeyModifiers::SUPER;
        }

        KeyEvent { code, modifiers }
    }
}

impl std::ops::BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Generic pointer gesture over a grid cell, identified by cell index.
/// `Up` carries no index: releasing outside every cell is the container-
/// level release the selectors handle via their last hovered position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(usize),
    Enter(usize),
    UpOn(usize),
    Up,
    Leave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossterm_key_conversion() {
        let ev = CrosstermKeyEvent::new(
            CrosstermKeyCode::Char('m'),
            CrosstermKeyModifiers::SHIFT | CrosstermKeyModifiers::CONTROL,
        );
        let key = KeyEvent::from(ev);
        assert_eq!(key.code, KeyCode::Char('m'));
        assert!(key.modifiers.contains(KeyModifiers::SHIFT));
        assert!(key.modifiers.contains(KeyModifiers::CONTROL));
        assert!(!key.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn unknown_keys_are_preserved_as_unknown() {
        let ev = CrosstermKeyEvent::new(CrosstermKeyCode::F(5), CrosstermKeyModifiers::NONE);
        assert_eq!(KeyEvent::from(ev).code, KeyCode::Unknown);
    }
}
