//! Civil calendar dates.
//!
//! Everything here is deterministic; `today()` is the single place the host
//! clock enters the crate, and every consumer that is "relative to now"
//! takes an explicit reference date instead of calling it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekday(pub u8);

impl Weekday {
    pub const MON: Self = Self(0);
    pub const TUE: Self = Self(1);
    pub const WED: Self = Self(2);
    pub const THU: Self = Self(3);
    pub const FRI: Self = Self(4);
    pub const SAT: Self = Self(5);
    pub const SUN: Self = Self(6);

    pub fn short_name(self) -> &'static str {
        ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"][self.0 as usize % 7]
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Weekday of a date, Monday = 0.
pub fn weekday_of(date: Date) -> Weekday {
    let t: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if date.month < 3 {
        date.year - 1
    } else {
        date.year
    };
    let m = date.month as i32;
    let d = date.day as i32;
    let raw = (y + y / 4 - y / 100 + y / 400 + t[(m - 1) as usize] + d) % 7;
    Weekday(((raw + 6) % 7) as u8)
}

/// Host-local current date. Hosts that need reproducible behavior pass an
/// explicit reference date to the relative-period functions instead.
pub fn today() -> Date {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    Date::from_unix_days(secs / 86400)
}

pub fn validate_date(year: i32, month: u8, day: u8) -> Result<Date, String> {
    if month < 1 || month > 12 {
        return Err(format!("Invalid month: {month}"));
    }
    let max_day = days_in_month(year, month);
    if day < 1 || day > max_day {
        return Err(format!(
            "Invalid day {day} for {}/{year} (max {max_day})",
            month
        ));
    }
    Ok(Date { year, month, day })
}

impl Date {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Date { year, month, day }
    }

    pub fn from_parts(year: i32, month: u8, day: u8) -> Result<Self, String> {
        validate_date(year, month, day)
    }

    /// Days since 1970-01-01 (Howard Hinnant's civil-date algorithm).
    pub fn to_unix_days(self) -> i64 {
        let y = if self.month <= 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = (y - era * 400) as i64;
        let m = self.month as i64;
        let d = self.day as i64;
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    pub fn from_unix_days(days: i64) -> Self {
        let z = days + 719468;
        let era = if z >= 0 { z } else { z - 146096 } / 146097;
        let doe = (z - era * 146097) as u32;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let y = yoe as i64 + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = if m <= 2 { y + 1 } else { y };
        Date {
            year: y as i32,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn add_days(self, delta: i64) -> Self {
        Self::from_unix_days(self.to_unix_days() + delta)
    }

    pub fn next_day(self) -> Self {
        self.add_days(1)
    }

    pub fn prev_day(self) -> Self {
        self.add_days(-1)
    }

    /// Month arithmetic; the day is clamped to the target month's length.
    pub fn add_months(self, delta: i32) -> Self {
        let total = self.month as i32 - 1 + delta;
        let year = self.year + total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        let day = self.day.min(days_in_month(year, month));
        Date { year, month, day }
    }

    /// Monday of the week containing this date.
    pub fn start_of_week(self) -> Self {
        self.add_days(-(weekday_of(self).0 as i64))
    }

    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn february_length_follows_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn unix_day_round_trip() {
        let epoch = Date::new(1970, 1, 1);
        assert_eq!(epoch.to_unix_days(), 0);
        assert_eq!(Date::from_unix_days(0), epoch);

        let d = Date::new(2024, 2, 29);
        assert_eq!(Date::from_unix_days(d.to_unix_days()), d);
    }

    #[test]
    fn add_days_crosses_month_and_year_boundaries() {
        assert_eq!(Date::new(2024, 12, 31).add_days(1), Date::new(2025, 1, 1));
        assert_eq!(Date::new(2025, 3, 1).add_days(-1), Date::new(2025, 2, 28));
        assert_eq!(Date::new(2024, 3, 1).add_days(-1), Date::new(2024, 2, 29));
    }

    #[test]
    fn add_months_clamps_the_day() {
        assert_eq!(Date::new(2025, 1, 31).add_months(1), Date::new(2025, 2, 28));
        assert_eq!(Date::new(2025, 1, 15).add_months(-2), Date::new(2024, 11, 15));
    }

    #[test]
    fn weekday_monday_zero() {
        // 2025-08-25 is a Monday.
        assert_eq!(weekday_of(Date::new(2025, 8, 25)), Weekday::MON);
        assert_eq!(weekday_of(Date::new(2025, 8, 24)), Weekday::SUN);
    }

    #[test]
    fn start_of_week_lands_on_monday() {
        let monday = Date::new(2025, 8, 25);
        assert_eq!(monday.start_of_week(), monday);
        assert_eq!(Date::new(2025, 8, 28).start_of_week(), monday);
        assert_eq!(Date::new(2025, 8, 31).start_of_week(), monday);
    }

    #[test]
    fn validate_rejects_out_of_range_parts() {
        assert!(Date::from_parts(2025, 13, 1).is_err());
        assert!(Date::from_parts(2025, 2, 29).is_err());
        assert!(Date::from_parts(2024, 2, 29).is_ok());
    }
}
