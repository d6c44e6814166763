use crate::calendar::date::Date;
use serde::{Deserialize, Serialize};

/// An inclusive span of calendar days.
///
/// `from <= to` always holds; constructors normalize by swapping, so an
/// inverted pair from a collaborator is accepted rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Date,
    pub to: Date,
}

impl DateRange {
    pub fn new(from: Date, to: Date) -> Self {
        if from <= to {
            DateRange { from, to }
        } else {
            DateRange { from: to, to: from }
        }
    }

    pub fn single(day: Date) -> Self {
        DateRange { from: day, to: day }
    }

    pub fn contains(&self, day: Date) -> bool {
        self.from <= day && day <= self.to
    }

    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }
}
