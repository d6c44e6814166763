//! Click-click day selection.
//!
//! Days commit on the second click rather than on drag release: the first
//! click anchors, the second completes. Clicking on or before the anchor
//! swaps the roles and still commits immediately, so the committed range is
//! always normalized.

use crate::calendar::date::Date;
use crate::calendar::range::DateRange;

#[derive(Debug, Default)]
pub struct DaySelector {
    anchor: Option<Date>,
    end: Option<Date>,
    hovered: Option<Date>,
    single_date: bool,
}

impl DaySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-click commit with `from == to`; the two-click flow is bypassed.
    pub fn single_date(mut self) -> Self {
        self.single_date = true;
        self
    }

    /// Re-seed from the externally-owned value (the host owns the canonical
    /// range; the selector only mirrors it for highlighting).
    pub fn sync_value(&mut self, value: Option<&DateRange>) {
        match value {
            Some(range) => {
                self.anchor = Some(range.from);
                self.end = Some(range.to);
            }
            None => {
                self.anchor = None;
                self.end = None;
            }
        }
    }

    /// Returns the committed range when the click completes a gesture.
    pub fn click(&mut self, day: Date) -> Option<DateRange> {
        if self.single_date {
            self.anchor = Some(day);
            self.end = Some(day);
            return Some(DateRange::single(day));
        }

        match (self.anchor, self.end) {
            // Fresh gesture: either nothing selected yet, or the previous
            // pair is complete and this click starts over.
            (None, _) | (Some(_), Some(_)) => {
                self.anchor = Some(day);
                self.end = None;
                None
            }
            (Some(anchor), None) => {
                if day > anchor {
                    self.end = Some(day);
                    Some(DateRange { from: anchor, to: day })
                } else {
                    // Clicked on or before the anchor: swap roles.
                    self.anchor = Some(day);
                    self.end = Some(anchor);
                    Some(DateRange { from: day, to: anchor })
                }
            }
        }
    }

    pub fn hover(&mut self, day: Date) {
        self.hovered = Some(day);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    /// Live preview: the candidate range while an anchor is open, or the
    /// hovered day itself otherwise. `None` when nothing is hovered.
    pub fn preview(&self) -> Option<DateRange> {
        let hovered = self.hovered?;
        if self.single_date {
            return Some(DateRange::single(hovered));
        }
        match (self.anchor, self.end) {
            (Some(anchor), None) => Some(DateRange::new(anchor, hovered)),
            _ => Some(DateRange::single(hovered)),
        }
    }

    /// True while a first click is waiting for its pair.
    pub fn selection_open(&self) -> bool {
        self.anchor.is_some() && self.end.is_none()
    }

    pub fn anchor(&self) -> Option<Date> {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_anchors_without_committing() {
        let mut sel = DaySelector::new();
        assert_eq!(sel.click(Date::new(2025, 1, 10)), None);
        assert!(sel.selection_open());
    }

    #[test]
    fn second_click_after_anchor_commits_forward() {
        let mut sel = DaySelector::new();
        sel.click(Date::new(2025, 1, 10));
        let committed = sel.click(Date::new(2025, 1, 20)).expect("commit");
        assert_eq!(committed.from, Date::new(2025, 1, 10));
        assert_eq!(committed.to, Date::new(2025, 1, 20));
    }

    #[test]
    fn second_click_before_anchor_swaps_and_commits() {
        let mut sel = DaySelector::new();
        sel.click(Date::new(2025, 1, 10));
        let committed = sel.click(Date::new(2025, 1, 5)).expect("commit");
        assert_eq!(committed.from, Date::new(2025, 1, 5));
        assert_eq!(committed.to, Date::new(2025, 1, 10));
    }

    #[test]
    fn clicking_the_anchor_commits_a_single_day() {
        let mut sel = DaySelector::new();
        let day = Date::new(2025, 1, 10);
        sel.click(day);
        let committed = sel.click(day).expect("commit");
        assert_eq!(committed, DateRange::single(day));
    }

    #[test]
    fn click_after_a_completed_pair_starts_over() {
        let mut sel = DaySelector::new();
        sel.click(Date::new(2025, 1, 10));
        sel.click(Date::new(2025, 1, 20));
        assert_eq!(sel.click(Date::new(2025, 2, 1)), None);
        assert!(sel.selection_open());
    }

    #[test]
    fn hover_previews_the_open_range() {
        let mut sel = DaySelector::new();
        sel.click(Date::new(2025, 1, 10));
        sel.hover(Date::new(2025, 1, 4));

        let preview = sel.preview().expect("preview");
        assert_eq!(preview.from, Date::new(2025, 1, 4));
        assert_eq!(preview.to, Date::new(2025, 1, 10));
    }

    #[test]
    fn hover_without_anchor_previews_the_single_day() {
        let mut sel = DaySelector::new();
        sel.hover(Date::new(2025, 1, 4));
        assert_eq!(
            sel.preview(),
            Some(DateRange::single(Date::new(2025, 1, 4)))
        );

        sel.hover_leave();
        assert_eq!(sel.preview(), None);
    }

    #[test]
    fn single_date_mode_commits_on_every_click() {
        let mut sel = DaySelector::new().single_date();
        let committed = sel.click(Date::new(2025, 3, 3)).expect("commit");
        assert_eq!(committed, DateRange::single(Date::new(2025, 3, 3)));

        let again = sel.click(Date::new(2025, 3, 4)).expect("commit");
        assert_eq!(again, DateRange::single(Date::new(2025, 3, 4)));
    }

    #[test]
    fn sync_value_restores_a_completed_pair() {
        let mut sel = DaySelector::new();
        sel.sync_value(Some(&DateRange::new(
            Date::new(2025, 1, 1),
            Date::new(2025, 1, 31),
        )));
        assert!(!sel.selection_open());

        // The next click starts a fresh gesture.
        assert_eq!(sel.click(Date::new(2025, 2, 10)), None);
    }
}
