//! Tab traversal between ordered focus regions.
//!
//! Tab enters the next region at its first item, Shift+Tab enters the
//! previous region at its last item so reverse traversal lands on the
//! closest control. Stepping past either end releases focus to the host's
//! default traversal instead of trapping it.

use crate::input::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    /// Focusable item count; empty sections are skipped over.
    pub len: usize,
    /// Enter this section at its last item even when tabbing forward.
    pub enter_at_last: bool,
    /// ArrowUp/Down move within the section instead of passing through.
    pub vertical_arrows: bool,
}

impl SectionDef {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            enter_at_last: false,
            vertical_arrows: false,
        }
    }

    pub fn enter_at_last(mut self) -> Self {
        self.enter_at_last = true;
        self
    }

    pub fn vertical_arrows(mut self) -> Self {
        self.vertical_arrows = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionNavOutcome {
    Ignored,
    Focus { section: usize, item: usize },
    /// Focus moved past the first or last region; the host's default
    /// traversal takes over.
    Release,
}

#[derive(Debug, Default)]
pub struct SectionNav {
    sections: Vec<SectionDef>,
    focus: Option<(usize, usize)>,
}

impl SectionNav {
    pub fn new(sections: Vec<SectionDef>) -> Self {
        Self {
            sections,
            focus: None,
        }
    }

    /// Section sets change with the surface mode; focus is dropped if it no
    /// longer points at a real item.
    pub fn set_sections(&mut self, sections: Vec<SectionDef>) {
        self.sections = sections;
        if let Some((section, item)) = self.focus {
            let valid = self
                .sections
                .get(section)
                .is_some_and(|def| item < def.len);
            if !valid {
                self.focus = None;
            }
        }
    }

    pub fn focus(&self) -> Option<(usize, usize)> {
        self.focus
    }

    pub fn set_focus(&mut self, section: usize, item: usize) {
        self.focus = Some((section, item));
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Auto-focus policy: seed initial focus on a section without a prior
    /// Tab press, honouring its entry direction.
    pub fn initial_focus(&mut self, section: usize) -> Option<(usize, usize)> {
        let def = self.sections.get(section)?;
        if def.len == 0 {
            return None;
        }
        let item = if def.enter_at_last { def.len - 1 } else { 0 };
        self.focus = Some((section, item));
        self.focus
    }

    pub fn on_key(&mut self, key: KeyEvent) -> SectionNavOutcome {
        let Some((section, item)) = self.focus else {
            return SectionNavOutcome::Ignored;
        };
        let Some(def) = self.sections.get(section).copied() else {
            return SectionNavOutcome::Ignored;
        };

        if def.vertical_arrows && matches!(key.code, KeyCode::Up | KeyCode::Down) {
            let next = match key.code {
                KeyCode::Up => item.saturating_sub(1),
                _ => (item + 1).min(def.len.saturating_sub(1)),
            };
            self.focus = Some((section, next));
            return SectionNavOutcome::Focus {
                section,
                item: next,
            };
        }

        let backwards = match key.code {
            KeyCode::BackTab => true,
            KeyCode::Tab => key.modifiers.contains(KeyModifiers::SHIFT),
            _ => return SectionNavOutcome::Ignored,
        };

        match self.enter_adjacent(section, backwards) {
            Some((section, item)) => {
                self.focus = Some((section, item));
                SectionNavOutcome::Focus { section, item }
            }
            None => {
                self.focus = None;
                SectionNavOutcome::Release
            }
        }
    }

    /// Nearest non-empty neighbour in the given direction, entered at the
    /// end reverse traversal expects.
    fn enter_adjacent(&self, from: usize, backwards: bool) -> Option<(usize, usize)> {
        let mut index = from;
        loop {
            index = if backwards {
                index.checked_sub(1)?
            } else {
                let next = index + 1;
                if next >= self.sections.len() {
                    return None;
                }
                next
            };
            let def = self.sections[index];
            if def.len == 0 {
                continue;
            }
            let item = if backwards || def.enter_at_last {
                def.len - 1
            } else {
                0
            };
            return Some((index, item));
        }
    }
}
