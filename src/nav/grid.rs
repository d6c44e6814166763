//! Arrow-key navigation inside a fixed-column grid.
//!
//! Operates over the focusable items in traversal order; the item list
//! itself lives with the caller (disabled cells are simply absent from it).
//! Without a focused item every key is ignored: navigation never acquires
//! focus as a side effect.

use crate::input::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridNavOutcome {
    Ignored,
    Moved(usize),
    Activate(usize),
}

#[derive(Debug)]
pub struct GridNav {
    columns: usize,
    focus: Option<usize>,
}

impl GridNav {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            focus: None,
        }
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = Some(index);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// `len` is the current item count; focus moves are clamped to it.
    pub fn on_key(&mut self, key: KeyEvent, len: usize) -> GridNavOutcome {
        let Some(current) = self.focus else {
            return GridNavOutcome::Ignored;
        };
        if len == 0 || current >= len {
            return GridNavOutcome::Ignored;
        }

        let next = match key.code {
            KeyCode::Right => (current + 1).min(len - 1),
            KeyCode::Left => current.saturating_sub(1),
            KeyCode::Down => (current + self.columns).min(len - 1),
            KeyCode::Up => current.saturating_sub(self.columns),
            KeyCode::Home => 0,
            KeyCode::End => len - 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                return GridNavOutcome::Activate(current);
            }
            _ => return GridNavOutcome::Ignored,
        };

        self.focus = Some(next);
        GridNavOutcome::Moved(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    #[test]
    fn arrows_move_within_a_three_column_grid() {
        let mut nav = GridNav::new(3);
        nav.set_focus(4);

        assert_eq!(nav.on_key(key(KeyCode::Down), 9), GridNavOutcome::Moved(7));
        assert_eq!(nav.on_key(key(KeyCode::Down), 9), GridNavOutcome::Moved(8));
        assert_eq!(nav.on_key(key(KeyCode::Up), 9), GridNavOutcome::Moved(5));
        assert_eq!(nav.on_key(key(KeyCode::Right), 9), GridNavOutcome::Moved(6));
        assert_eq!(nav.on_key(key(KeyCode::Left), 9), GridNavOutcome::Moved(5));
    }

    #[test]
    fn moves_clamp_at_the_edges() {
        let mut nav = GridNav::new(3);
        nav.set_focus(8);
        assert_eq!(nav.on_key(key(KeyCode::Right), 9), GridNavOutcome::Moved(8));
        assert_eq!(nav.on_key(key(KeyCode::Down), 9), GridNavOutcome::Moved(8));

        nav.set_focus(0);
        assert_eq!(nav.on_key(key(KeyCode::Left), 9), GridNavOutcome::Moved(0));
        assert_eq!(nav.on_key(key(KeyCode::Up), 9), GridNavOutcome::Moved(0));
    }

    #[test]
    fn home_and_end_jump() {
        let mut nav = GridNav::new(3);
        nav.set_focus(4);
        assert_eq!(nav.on_key(key(KeyCode::Home), 9), GridNavOutcome::Moved(0));
        assert_eq!(nav.on_key(key(KeyCode::End), 9), GridNavOutcome::Moved(8));
    }

    #[test]
    fn enter_and_space_activate_in_place() {
        let mut nav = GridNav::new(3);
        nav.set_focus(4);
        assert_eq!(
            nav.on_key(key(KeyCode::Enter), 9),
            GridNavOutcome::Activate(4)
        );
        assert_eq!(
            nav.on_key(key(KeyCode::Char(' ')), 9),
            GridNavOutcome::Activate(4)
        );
        assert_eq!(nav.focus(), Some(4));
    }

    #[test]
    fn ignored_without_focus() {
        let mut nav = GridNav::new(3);
        assert_eq!(nav.on_key(key(KeyCode::Down), 9), GridNavOutcome::Ignored);
        assert_eq!(nav.focus(), None);
    }

    #[test]
    fn stale_focus_past_the_list_is_ignored() {
        let mut nav = GridNav::new(3);
        nav.set_focus(10);
        assert_eq!(nav.on_key(key(KeyCode::Down), 9), GridNavOutcome::Ignored);
    }
}
