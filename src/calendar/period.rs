//! Calendar-aligned periods and the positions the grid selectors drag over.
//!
//! Month indices are zero-based (0 = January) to match the persisted data
//! and the grid layouts; quarters are 1-4 and halves 1-2. Every position
//! collapses to a single ordinal so span math never cares which endpoint the
//! user grabbed first.

use crate::calendar::date::{Date, days_in_month};
use crate::calendar::format::{MONTH_NAMES, quarter_months};
use crate::calendar::range::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Month,
    Quarter,
    Half,
    Year,
}

// ── Period boundaries ─────────────────────────────────────────────────────────

/// Full month, `month0` in 0..=11.
pub fn month_range(year: i32, month0: u8) -> DateRange {
    let month = month0 + 1;
    DateRange {
        from: Date::new(year, month, 1),
        to: Date::new(year, month, days_in_month(year, month)),
    }
}

/// Full quarter, `quarter` in 1..=4 (Q1 = Jan-Mar … Q4 = Oct-Dec).
pub fn quarter_range(year: i32, quarter: u8) -> DateRange {
    let first = (quarter - 1) * 3;
    DateRange {
        from: month_range(year, first).from,
        to: month_range(year, first + 2).to,
    }
}

/// Full half-year, `half` 1 (Jan-Jun) or 2 (Jul-Dec).
pub fn half_range(year: i32, half: u8) -> DateRange {
    if half == 1 {
        DateRange {
            from: Date::new(year, 1, 1),
            to: Date::new(year, 6, 30),
        }
    } else {
        DateRange {
            from: Date::new(year, 7, 1),
            to: Date::new(year, 12, 31),
        }
    }
}

pub fn year_range(year: i32) -> DateRange {
    DateRange {
        from: Date::new(year, 1, 1),
        to: Date::new(year, 12, 31),
    }
}

// ── Positions ─────────────────────────────────────────────────────────────────

/// A period position inside a grid: comparable via a single ordinal and
/// expandable to its full calendar range.
pub trait PeriodPosition: Copy + Eq {
    const UNIT: PeriodUnit;
    /// Grid column count used by the keyboard navigation layer.
    const COLUMNS: usize;

    fn ordinal(self) -> i64;
    fn range(self) -> DateRange;
    fn label(self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthPosition {
    pub year: i32,
    /// 0-based month index, 0 = January.
    pub month: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuarterPosition {
    pub year: i32,
    /// 1..=4
    pub quarter: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfPosition {
    pub year: i32,
    /// 1 or 2
    pub half: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearPosition {
    pub year: i32,
}

impl PeriodPosition for MonthPosition {
    const UNIT: PeriodUnit = PeriodUnit::Month;
    const COLUMNS: usize = 3;

    fn ordinal(self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    fn range(self) -> DateRange {
        month_range(self.year, self.month)
    }

    fn label(self) -> String {
        MONTH_NAMES[self.month as usize % 12].to_string()
    }
}

impl PeriodPosition for QuarterPosition {
    const UNIT: PeriodUnit = PeriodUnit::Quarter;
    const COLUMNS: usize = 4;

    fn ordinal(self) -> i64 {
        self.year as i64 * 4 + self.quarter as i64
    }

    fn range(self) -> DateRange {
        quarter_range(self.year, self.quarter)
    }

    fn label(self) -> String {
        format!("Q{} · {}", self.quarter, quarter_months(self.quarter))
    }
}

impl PeriodPosition for HalfPosition {
    const UNIT: PeriodUnit = PeriodUnit::Half;
    const COLUMNS: usize = 2;

    fn ordinal(self) -> i64 {
        self.year as i64 * 2 + self.half as i64
    }

    fn range(self) -> DateRange {
        half_range(self.year, self.half)
    }

    fn label(self) -> String {
        if self.half == 1 {
            "H1 · Jan - Jun".to_string()
        } else {
            "H2 · Jul - Dec".to_string()
        }
    }
}

impl PeriodPosition for YearPosition {
    const UNIT: PeriodUnit = PeriodUnit::Year;
    const COLUMNS: usize = 3;

    fn ordinal(self) -> i64 {
        self.year as i64
    }

    fn range(self) -> DateRange {
        year_range(self.year)
    }

    fn label(self) -> String {
        self.year.to_string()
    }
}

/// Merge two positions into one range, order-independent: the earlier
/// period's start through the later period's end. A tie is the single
/// period itself.
pub fn span_range<P: PeriodPosition>(a: P, b: P) -> DateRange {
    let (first, last) = if a.ordinal() <= b.ordinal() {
        (a, b)
    } else {
        (b, a)
    };
    DateRange {
        from: first.range().from,
        to: last.range().to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_range_covers_whole_month() {
        // Month index 3 of 2024 is April.
        let r = month_range(2024, 3);
        assert_eq!(r.from, Date::new(2024, 4, 1));
        assert_eq!(r.to, Date::new(2024, 4, 30));

        let feb = month_range(2024, 1);
        assert_eq!(feb.to, Date::new(2024, 2, 29));
    }

    #[test]
    fn quarter_ranges_map_to_month_triples() {
        assert_eq!(quarter_range(2024, 1).from, Date::new(2024, 1, 1));
        assert_eq!(quarter_range(2024, 1).to, Date::new(2024, 3, 31));
        assert_eq!(quarter_range(2024, 3).from, Date::new(2024, 7, 1));
        assert_eq!(quarter_range(2024, 3).to, Date::new(2024, 9, 30));
        assert_eq!(quarter_range(2024, 4).to, Date::new(2024, 12, 31));
    }

    #[test]
    fn half_ranges_split_the_year() {
        assert_eq!(half_range(2025, 1).from, Date::new(2025, 1, 1));
        assert_eq!(half_range(2025, 1).to, Date::new(2025, 6, 30));
        assert_eq!(half_range(2025, 2).from, Date::new(2025, 7, 1));
        assert_eq!(half_range(2025, 2).to, Date::new(2025, 12, 31));
    }

    #[test]
    fn span_range_is_symmetric() {
        let a = MonthPosition {
            year: 2024,
            month: 10,
        };
        let b = MonthPosition {
            year: 2025,
            month: 1,
        };
        assert_eq!(span_range(a, b), span_range(b, a));
        assert_eq!(span_range(a, b).from, Date::new(2024, 11, 1));
        assert_eq!(span_range(a, b).to, Date::new(2025, 2, 28));
    }

    #[test]
    fn span_range_tie_is_the_single_period() {
        let q = QuarterPosition {
            year: 2024,
            quarter: 2,
        };
        assert_eq!(span_range(q, q), quarter_range(2024, 2));
    }

    #[test]
    fn year_span_across_ordering() {
        let a = YearPosition { year: 2025 };
        let b = YearPosition { year: 2022 };
        let r = span_range(a, b);
        assert_eq!(r.from, Date::new(2022, 1, 1));
        assert_eq!(r.to, Date::new(2025, 12, 31));
    }
}
