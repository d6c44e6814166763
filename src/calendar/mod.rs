pub mod date;
pub mod format;
pub mod period;
pub mod range;
pub mod relative;

pub use date::{Date, Weekday, days_in_month, is_leap_year, today, weekday_of};
pub use format::{RangeKind, classify, format_compact, format_full};
pub use period::{
    HalfPosition, MonthPosition, PeriodPosition, PeriodUnit, QuarterPosition, YearPosition,
    half_range, month_range, quarter_range, span_range, year_range,
};
pub use range::DateRange;
pub use relative::{RelativeUnit, last_complete, this_period};
