//! Period grids: cell layout, future-period gating and render state.
//!
//! A view owns the flat, oldest-first list of positions a picker shows,
//! routes pointer events into the shared drag machine, and hands the host
//! everything it needs to paint cells without redoing any date logic.

use crate::calendar::date::Date;
use crate::calendar::period::{
    HalfPosition, MonthPosition, PeriodPosition, QuarterPosition, YearPosition,
};
use crate::calendar::range::DateRange;
use crate::input::event::PointerEvent;
use crate::select::grid::GridSelector;

/// How many years back the month/quarter/half grids reach.
pub const GRID_YEARS: i32 = 5;
/// How many years the year grid lists.
pub const YEAR_GRID_YEARS: i32 = 15;

/// Render state for one cell; `selected` means exact equality with the
/// committed value, not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellState {
    pub label: String,
    pub selected: bool,
    pub in_preview: bool,
    pub is_preview_boundary: bool,
    pub disabled: bool,
}

#[derive(Debug)]
pub struct PeriodGridView<P> {
    positions: Vec<P>,
    today: Date,
    selector: GridSelector<P>,
}

impl<P: PeriodPosition> PeriodGridView<P> {
    fn from_positions(positions: Vec<P>, today: Date) -> Self {
        Self {
            positions,
            today,
            selector: GridSelector::new(),
        }
    }

    pub fn columns(&self) -> usize {
        P::COLUMNS
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<P> {
        self.positions.get(index).copied()
    }

    /// A period is out of reach once it starts after `today`.
    pub fn is_disabled(&self, index: usize) -> bool {
        match self.position(index) {
            Some(pos) => pos.range().from > self.today,
            None => true,
        }
    }

    /// Indices participating in pointer and keyboard interaction.
    pub fn focusable(&self) -> Vec<usize> {
        (0..self.positions.len())
            .filter(|&i| !self.is_disabled(i))
            .collect()
    }

    /// Route one pointer event; disabled cells do not interact. Returns the
    /// committed range when the event completes a gesture.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<DateRange> {
        match event {
            PointerEvent::Down(index) => {
                if let Some(pos) = self.enabled_position(index) {
                    self.selector.pointer_down(pos);
                }
                None
            }
            PointerEvent::Enter(index) => {
                if let Some(pos) = self.enabled_position(index) {
                    self.selector.pointer_enter(pos);
                }
                None
            }
            PointerEvent::UpOn(index) => match self.enabled_position(index) {
                Some(pos) => self.selector.pointer_up(pos),
                None => self.selector.release(),
            },
            PointerEvent::Up => self.selector.release(),
            PointerEvent::Leave => {
                self.selector.hover_leave();
                None
            }
        }
    }

    /// Plain activation of a cell (keyboard Enter/Space or synthetic click).
    pub fn activate(&mut self, index: usize) -> Option<DateRange> {
        let pos = self.enabled_position(index)?;
        self.selector.click(pos)
    }

    pub fn cancel(&mut self) {
        self.selector.cancel();
    }

    pub fn preview(&self) -> Option<DateRange> {
        self.selector.preview()
    }

    pub fn cells(&self, current: Option<&DateRange>) -> Vec<CellState> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| CellState {
                label: pos.label(),
                selected: current.is_some_and(|value| pos.range() == *value),
                in_preview: self.selector.in_preview(pos),
                is_preview_boundary: self.selector.is_preview_boundary(pos),
                disabled: self.is_disabled(i),
            })
            .collect()
    }

    fn enabled_position(&self, index: usize) -> Option<P> {
        if self.is_disabled(index) {
            return None;
        }
        self.position(index)
    }
}

impl PeriodGridView<MonthPosition> {
    /// Twelve months per year for the last [`GRID_YEARS`] years, oldest
    /// first, three columns.
    pub fn months(today: Date) -> Self {
        let mut positions = Vec::new();
        for year in (today.year - GRID_YEARS + 1)..=today.year {
            for month in 0..12 {
                positions.push(MonthPosition { year, month });
            }
        }
        Self::from_positions(positions, today)
    }
}

impl PeriodGridView<QuarterPosition> {
    pub fn quarters(today: Date) -> Self {
        let mut positions = Vec::new();
        for year in (today.year - GRID_YEARS + 1)..=today.year {
            for quarter in 1..=4 {
                positions.push(QuarterPosition { year, quarter });
            }
        }
        Self::from_positions(positions, today)
    }
}

impl PeriodGridView<HalfPosition> {
    pub fn halves(today: Date) -> Self {
        let mut positions = Vec::new();
        for year in (today.year - GRID_YEARS + 1)..=today.year {
            for half in 1..=2 {
                positions.push(HalfPosition { year, half });
            }
        }
        Self::from_positions(positions, today)
    }
}

impl PeriodGridView<YearPosition> {
    pub fn years(today: Date) -> Self {
        let positions = ((today.year - YEAR_GRID_YEARS + 1)..=today.year)
            .map(|year| YearPosition { year })
            .collect();
        Self::from_positions(positions, today)
    }
}
