pub mod calendar;
pub mod input;
pub mod nav;
pub mod presets;
pub mod select;
pub mod surface;

pub use calendar::date::{Date, Weekday, today};
pub use calendar::format::{RangeKind, classify, format_compact, format_full};
pub use calendar::period::{
    HalfPosition, MonthPosition, PeriodPosition, QuarterPosition, YearPosition,
};
pub use calendar::range::DateRange;
pub use calendar::relative::RelativeUnit;

pub use input::event::{KeyCode, KeyEvent, KeyModifiers, PointerEvent};

pub use nav::grid::{GridNav, GridNavOutcome};
pub use nav::section::{SectionDef, SectionNav, SectionNavOutcome};
pub use nav::shortcuts::{Shortcut, ShortcutMap};

pub use presets::model::{CustomPreset, PresetMode};
pub use presets::store::{KeyValueStore, MemoryStore, PresetStore};

pub use select::day::DaySelector;
pub use select::grid::GridSelector;
pub use select::view::{CellState, PeriodGridView};

pub use surface::{PickerConfig, PickerSurface, QuickPreset, QuickRange, SurfaceMode};
