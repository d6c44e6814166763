//! Drag-to-span selection over a period grid.
//!
//! One state machine serves month, quarter, half-year and year grids; the
//! position type supplies the period boundaries and the ordinal used to
//! order the two endpoints.
//!
//! Release precedence: a release on a cell commits and arms a one-shot
//! click suppression, so the click the host fires right after the release
//! can never commit a second time. The container-level release (pointer
//! left the grid) commits from the last hovered position the same way.
//! `click` therefore only commits for gestures without a pointer-down,
//! which is how keyboard activation enters.

use crate::calendar::period::{PeriodPosition, span_range};
use crate::calendar::range::DateRange;

#[derive(Debug)]
pub struct GridSelector<P> {
    anchor: Option<P>,
    hovered: Option<P>,
    dragging: bool,
    suppress_click: bool,
}

impl<P> Default for GridSelector<P> {
    fn default() -> Self {
        Self {
            anchor: None,
            hovered: None,
            dragging: false,
            suppress_click: false,
        }
    }
}

impl<P: PeriodPosition> GridSelector<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture. No commit yet; a motionless click still works
    /// because release on the anchor cell spans it with itself.
    pub fn pointer_down(&mut self, pos: P) {
        self.anchor = Some(pos);
        self.hovered = Some(pos);
        self.dragging = true;
        self.suppress_click = false;
    }

    pub fn pointer_enter(&mut self, pos: P) {
        self.hovered = Some(pos);
    }

    /// Release on a cell: commits the span from anchor to that cell.
    pub fn pointer_up(&mut self, pos: P) -> Option<DateRange> {
        if !self.dragging {
            return None;
        }
        let anchor = self.anchor?;
        self.clear_gesture();
        self.suppress_click = true;
        Some(span_range(anchor, pos))
    }

    /// Release outside every cell: commits from the last hovered position.
    pub fn release(&mut self) -> Option<DateRange> {
        if !self.dragging {
            self.clear_gesture();
            return None;
        }
        let committed = match (self.anchor, self.hovered) {
            (Some(anchor), Some(hovered)) => Some(span_range(anchor, hovered)),
            _ => None,
        };
        self.clear_gesture();
        if committed.is_some() {
            self.suppress_click = true;
        }
        committed
    }

    /// Plain activation with no preceding pointer-down (keyboard Enter or a
    /// synthetic click): commits the single period.
    pub fn click(&mut self, pos: P) -> Option<DateRange> {
        if self.suppress_click {
            self.suppress_click = false;
            return None;
        }
        if self.dragging {
            return None;
        }
        Some(pos.range())
    }

    pub fn hover_leave(&mut self) {
        if !self.dragging {
            self.hovered = None;
        }
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        self.clear_gesture();
        self.suppress_click = false;
    }

    /// Live candidate: the anchor-to-hover span while dragging, the hovered
    /// period alone otherwise.
    pub fn preview(&self) -> Option<DateRange> {
        match (self.anchor, self.hovered) {
            (Some(anchor), Some(hovered)) if self.dragging => Some(span_range(anchor, hovered)),
            (None, Some(hovered)) => Some(hovered.range()),
            _ => None,
        }
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn in_preview(&self, pos: P) -> bool {
        match (self.anchor, self.hovered) {
            (Some(anchor), Some(hovered)) if self.dragging => {
                let (lo, hi) = if anchor.ordinal() <= hovered.ordinal() {
                    (anchor.ordinal(), hovered.ordinal())
                } else {
                    (hovered.ordinal(), anchor.ordinal())
                };
                (lo..=hi).contains(&pos.ordinal())
            }
            (None, Some(hovered)) => hovered == pos,
            _ => false,
        }
    }

    /// Anchor or hover endpoint of the live preview.
    pub fn is_preview_boundary(&self, pos: P) -> bool {
        if self.dragging {
            self.anchor == Some(pos) || self.hovered == Some(pos)
        } else {
            self.anchor.is_none() && self.hovered == Some(pos)
        }
    }

    fn clear_gesture(&mut self) {
        self.anchor = None;
        self.hovered = None;
        self.dragging = false;
    }
}
