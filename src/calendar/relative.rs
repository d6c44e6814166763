//! Periods relative to a reference date.
//!
//! "Last N units" follows the accounting convention: the range ends with the
//! most recently *completed* period and never includes the one in progress.
//! Every function takes the reference date explicitly; callers clamp counts
//! to >= 1 before this layer.

use crate::calendar::date::Date;
use crate::calendar::period::{month_range, quarter_range, year_range};
use crate::calendar::range::DateRange;
use serde::{Deserialize, Serialize};

/// Units a relative preset can count in. Quarters and halves are selected
/// from the grids instead, so they are not preset units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl RelativeUnit {
    pub fn singular(self) -> &'static str {
        match self {
            RelativeUnit::Days => "Day",
            RelativeUnit::Weeks => "Week",
            RelativeUnit::Months => "Month",
            RelativeUnit::Years => "Year",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            RelativeUnit::Days => "Days",
            RelativeUnit::Weeks => "Weeks",
            RelativeUnit::Months => "Months",
            RelativeUnit::Years => "Years",
        }
    }
}

/// The last `count` complete periods before `today`'s period.
pub fn last_complete(unit: RelativeUnit, count: u32, today: Date) -> DateRange {
    let count = count as i64;
    match unit {
        RelativeUnit::Days => {
            let to = today.prev_day();
            DateRange {
                from: to.add_days(-(count - 1)),
                to,
            }
        }
        RelativeUnit::Weeks => {
            let to = today.start_of_week().prev_day();
            DateRange {
                from: to.add_days(-(count * 7 - 1)),
                to,
            }
        }
        RelativeUnit::Months => {
            let last = today.add_months(-1);
            let first = today.add_months(-(count as i32));
            DateRange {
                from: month_range(first.year, first.month - 1).from,
                to: month_range(last.year, last.month - 1).to,
            }
        }
        RelativeUnit::Years => DateRange {
            from: year_range(today.year - count as i32).from,
            to: year_range(today.year - 1).to,
        },
    }
}

/// The period containing `today`.
pub fn this_period(unit: RelativeUnit, today: Date) -> DateRange {
    match unit {
        RelativeUnit::Days => DateRange::single(today),
        RelativeUnit::Weeks => {
            let from = today.start_of_week();
            DateRange {
                from,
                to: from.add_days(6),
            }
        }
        RelativeUnit::Months => month_range(today.year, today.month - 1),
        RelativeUnit::Years => year_range(today.year),
    }
}

// ── Quick-preset ranges ───────────────────────────────────────────────────────

pub fn last_month(today: Date) -> DateRange {
    last_complete(RelativeUnit::Months, 1, today)
}

pub fn last_quarter(today: Date) -> DateRange {
    let q = (today.month - 1) / 3 + 1;
    if q == 1 {
        quarter_range(today.year - 1, 4)
    } else {
        quarter_range(today.year, q - 1)
    }
}

pub fn last_year(today: Date) -> DateRange {
    last_complete(RelativeUnit::Years, 1, today)
}

/// January 1 through `today`.
pub fn year_to_date(today: Date) -> DateRange {
    DateRange {
        from: Date::new(today.year, 1, 1),
        to: today,
    }
}
