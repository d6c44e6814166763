//! Range classification and display labels.

use crate::calendar::date::{Date, days_in_month};
use crate::calendar::range::DateRange;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_FULL_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// "Jan - Mar" style sublabel for a quarter (1..=4).
pub fn quarter_months(quarter: u8) -> &'static str {
    ["Jan - Mar", "Apr - Jun", "Jul - Sep", "Oct - Dec"][(quarter as usize - 1) % 4]
}

/// Descending year list starting at `start_year`, for year dropdowns.
pub fn year_options(start_year: i32, count: usize) -> Vec<i32> {
    (0..count as i32).map(|i| start_year - i).collect()
}

/// Which granularity tab a committed range belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeKind {
    #[default]
    Days,
    Month,
    Quarter,
    Half,
    Year,
}

fn is_month_start(d: Date) -> bool {
    d.day == 1
}

fn is_month_end(d: Date) -> bool {
    d.day == days_in_month(d.year, d.month)
}

fn quarter_of(d: Date) -> u8 {
    (d.month - 1) / 3 + 1
}

/// Classify a range by the largest period it exactly covers.
///
/// The checks run year → half → quarter → month → days; the order matters
/// because a full year also satisfies every smaller check.
pub fn classify(range: &DateRange) -> RangeKind {
    let DateRange { from, to } = *range;
    let same_year = from.year == to.year;

    if same_year && from.month == 1 && from.day == 1 && to.month == 12 && to.day == 31 {
        return RangeKind::Year;
    }

    if same_year
        && is_month_start(from)
        && is_month_end(to)
        && ((from.month == 1 && to.month == 6) || (from.month == 7 && to.month == 12))
    {
        return RangeKind::Half;
    }

    if same_year
        && quarter_of(from) == quarter_of(to)
        && is_month_start(from)
        && from.month % 3 == 1
        && is_month_end(to)
        && to.month % 3 == 0
    {
        return RangeKind::Quarter;
    }

    if same_year && from.month == to.month && is_month_start(from) && is_month_end(to) {
        return RangeKind::Month;
    }

    RangeKind::Days
}

fn month_day(d: Date) -> String {
    format!("{} {}", MONTH_NAMES[(d.month as usize - 1) % 12], d.day)
}

fn month_day_year(d: Date) -> String {
    format!("{}, {}", month_day(d), d.year)
}

/// Shortest label that still identifies the range: "Jan - Dec 2024",
/// "H1 2025", "Q3 2024", "July 2025", "Mar - May 2025", or explicit days.
pub fn format_compact(range: &DateRange) -> String {
    let DateRange { from, to } = *range;

    match classify(range) {
        RangeKind::Year => format!("Jan - Dec {}", from.year),
        RangeKind::Half => {
            let half = if from.month == 1 { 1 } else { 2 };
            format!("H{half} {}", from.year)
        }
        RangeKind::Quarter => format!("Q{} {}", quarter_of(from), from.year),
        RangeKind::Month => format!(
            "{} {}",
            MONTH_FULL_NAMES[(from.month as usize - 1) % 12],
            from.year
        ),
        RangeKind::Days => {
            // Month-aligned multi-month spans still get a compact label.
            if is_month_start(from) && is_month_end(to) {
                let a = MONTH_NAMES[(from.month as usize - 1) % 12];
                let b = MONTH_NAMES[(to.month as usize - 1) % 12];
                if from.year == to.year {
                    format!("{a} - {b} {}", from.year)
                } else {
                    format!("{a} {} - {b} {}", from.year, to.year)
                }
            } else {
                format!("{} - {}", month_day_year(from), month_day_year(to))
            }
        }
    }
}

/// Always day-explicit; the `from` side drops its year only when both
/// endpoints share one ("Jul 1 - Jul 31, 2025").
pub fn format_full(range: &DateRange) -> String {
    let DateRange { from, to } = *range;
    if from.year == to.year {
        format!("{} - {}", month_day(from), month_day_year(to))
    } else {
        format!("{} - {}", month_day_year(from), month_day_year(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::period::{half_range, month_range, quarter_range, year_range};

    #[test]
    fn classify_round_trips_every_unit() {
        assert_eq!(classify(&year_range(2024)), RangeKind::Year);
        for half in 1..=2 {
            assert_eq!(classify(&half_range(2024, half)), RangeKind::Half);
        }
        for q in 1..=4 {
            assert_eq!(classify(&quarter_range(2024, q)), RangeKind::Quarter);
        }
        for m in 0..12 {
            let kind = classify(&month_range(2024, m));
            // January, June, July and December open or close a larger
            // period only as part of it, never alone.
            assert_eq!(kind, RangeKind::Month, "month index {m}");
        }
    }

    #[test]
    fn classify_prefers_the_largest_period() {
        // A full year is also two full halves and four full quarters.
        let r = DateRange::new(Date::new(2024, 1, 1), Date::new(2024, 12, 31));
        assert_eq!(classify(&r), RangeKind::Year);

        let h1 = DateRange::new(Date::new(2024, 1, 1), Date::new(2024, 6, 30));
        assert_eq!(classify(&h1), RangeKind::Half);
    }

    #[test]
    fn classify_requires_same_year() {
        let r = DateRange::new(Date::new(2024, 7, 1), Date::new(2025, 6, 30));
        assert_eq!(classify(&r), RangeKind::Days);
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_compact(&year_range(2024)), "Jan - Dec 2024");
        assert_eq!(format_compact(&half_range(2025, 2)), "H2 2025");
        assert_eq!(format_compact(&quarter_range(2024, 3)), "Q3 2024");
        assert_eq!(format_compact(&month_range(2025, 6)), "July 2025");
    }

    #[test]
    fn compact_month_aligned_spans() {
        let r = DateRange::new(Date::new(2025, 3, 1), Date::new(2025, 5, 31));
        assert_eq!(format_compact(&r), "Mar - May 2025");

        let cross = DateRange::new(Date::new(2024, 11, 1), Date::new(2025, 2, 28));
        assert_eq!(format_compact(&cross), "Nov 2024 - Feb 2025");
    }

    #[test]
    fn compact_falls_back_to_explicit_days() {
        let r = DateRange::new(Date::new(2025, 3, 5), Date::new(2025, 3, 20));
        assert_eq!(format_compact(&r), "Mar 5, 2025 - Mar 20, 2025");
    }

    #[test]
    fn full_label_omits_from_year_within_one_year() {
        let r = DateRange::new(Date::new(2025, 7, 1), Date::new(2025, 7, 31));
        assert_eq!(format_full(&r), "Jul 1 - Jul 31, 2025");

        let cross = DateRange::new(Date::new(2024, 12, 1), Date::new(2025, 1, 31));
        assert_eq!(format_full(&cross), "Dec 1, 2024 - Jan 31, 2025");
    }
}
