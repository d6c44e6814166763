//! Relative preset definitions.

use crate::calendar::date::Date;
use crate::calendar::range::DateRange;
use crate::calendar::relative::{RelativeUnit, last_complete, this_period};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetMode {
    Last,
    This,
}

/// A persisted relative preset: "Last 3 Months", "This Week", …
///
/// `label` is derived from `(mode, count, unit)` on every write and never
/// edited by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPreset {
    pub id: String,
    pub mode: PresetMode,
    pub count: u32,
    pub unit: RelativeUnit,
    pub label: String,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
}

/// "This Month" / "Last 1 Day" / "Last 3 Months". Count 1 keeps the unit
/// singular; "This" ignores the count entirely.
pub fn preset_label(mode: PresetMode, count: u32, unit: RelativeUnit) -> String {
    match mode {
        PresetMode::This => format!("This {}", unit.singular()),
        PresetMode::Last => {
            let word = if count == 1 {
                unit.singular()
            } else {
                unit.plural()
            };
            format!("Last {count} {word}")
        }
    }
}

/// Resolve a preset against a reference date. Counts below 1 are clamped
/// here so the calendar layer never sees them.
pub fn preset_range(preset: &CustomPreset, today: Date) -> DateRange {
    match preset.mode {
        PresetMode::This => this_period(preset.unit, today),
        PresetMode::Last => last_complete(preset.unit, preset.count.max(1), today),
    }
}
