//! The host-facing picker surface.
//!
//! Owns the canonical selected range, the active granularity tab (always
//! re-derived from the range, never stored independently by a selector),
//! the preset store and the edit-mode state machine. Rendering, popover
//! chrome and focus application stay with the host; the surface hands it
//! render state and focus targets.

use crate::calendar::date::{Date, today};
use crate::calendar::format::{RangeKind, classify, format_compact, format_full};
use crate::calendar::range::DateRange;
use crate::calendar::relative::{
    RelativeUnit, last_month, last_quarter, last_year, year_to_date,
};
use crate::input::event::{KeyEvent, PointerEvent};
use crate::nav::section::SectionDef;
use crate::nav::shortcuts::ShortcutMap;
use crate::presets::model::{PresetMode, preset_label, preset_range};
use crate::presets::store::{KeyValueStore, PresetStore};
use crate::select::day::DaySelector;
use crate::select::view::PeriodGridView;
use tracing::debug;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Gates which sub-components are active; never changes the algorithms.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickerConfig {
    /// Collapse the day selector to one-click commits with `from == to`.
    pub single_date_mode: bool,
    pub hide_quick_presets: bool,
    pub hide_custom_presets: bool,
}

// ── Quick presets ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    LastMonth,
    LastQuarter,
    LastYear,
    YearToDate,
}

impl QuickRange {
    pub fn resolve(self, today: Date) -> DateRange {
        match self {
            QuickRange::LastMonth => last_month(today),
            QuickRange::LastQuarter => last_quarter(today),
            QuickRange::LastYear => last_year(today),
            QuickRange::YearToDate => year_to_date(today),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuickPreset {
    pub label: &'static str,
    pub shortcut: &'static str,
    pub range: QuickRange,
}

pub const QUICK_PRESETS: [QuickPreset; 4] = [
    QuickPreset {
        label: "Last Month",
        shortcut: "M",
        range: QuickRange::LastMonth,
    },
    QuickPreset {
        label: "Last Quarter",
        shortcut: "Q",
        range: QuickRange::LastQuarter,
    },
    QuickPreset {
        label: "Last Year",
        shortcut: "Y",
        range: QuickRange::LastYear,
    },
    QuickPreset {
        label: "Year to Date",
        shortcut: "T",
        range: QuickRange::YearToDate,
    },
];

// ── Mode machine ──────────────────────────────────────────────────────────────

/// What the surface is doing; section sets derive from this instead of from
/// scattered booleans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SurfaceMode {
    #[default]
    Browsing,
    CreatingPreset,
    EditingPreset(String),
}

/// In-progress preset form values. Count is clamped on every edit so the
/// calendar layer never sees zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDraft {
    pub mode: PresetMode,
    pub count: u32,
    pub unit: RelativeUnit,
}

impl Default for PresetDraft {
    fn default() -> Self {
        Self {
            mode: PresetMode::Last,
            count: 1,
            unit: RelativeUnit::Months,
        }
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct PickerSurface<S: KeyValueStore> {
    today: Date,
    value: Option<DateRange>,
    active_tab: RangeKind,
    mode: SurfaceMode,
    config: PickerConfig,
    presets: PresetStore<S>,
    shortcuts: ShortcutMap<QuickRange>,
    draft: PresetDraft,

    day: DaySelector,
    months: PeriodGridView<crate::calendar::period::MonthPosition>,
    quarters: PeriodGridView<crate::calendar::period::QuarterPosition>,
    halves: PeriodGridView<crate::calendar::period::HalfPosition>,
    years: PeriodGridView<crate::calendar::period::YearPosition>,
}

impl<S: KeyValueStore> PickerSurface<S> {
    pub fn new(backend: S, config: PickerConfig) -> Self {
        Self::with_today(backend, config, today())
    }

    /// Explicit reference date, for hosts and tests that pin the clock.
    pub fn with_today(backend: S, config: PickerConfig, today: Date) -> Self {
        let mut shortcuts = ShortcutMap::new();
        if !config.hide_quick_presets {
            for preset in QUICK_PRESETS {
                shortcuts.bind_spec(preset.shortcut, preset.range);
            }
        }

        let day = if config.single_date_mode {
            DaySelector::new().single_date()
        } else {
            DaySelector::new()
        };

        Self {
            today,
            value: None,
            active_tab: RangeKind::Days,
            mode: SurfaceMode::Browsing,
            config,
            presets: PresetStore::new(backend),
            shortcuts,
            draft: PresetDraft::default(),
            day,
            months: PeriodGridView::months(today),
            quarters: PeriodGridView::quarters(today),
            halves: PeriodGridView::halves(today),
            years: PeriodGridView::years(today),
        }
    }

    // ── Canonical value ───────────────────────────────────────────────────────

    pub fn value(&self) -> Option<&DateRange> {
        self.value.as_ref()
    }

    pub fn active_tab(&self) -> RangeKind {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: RangeKind) {
        self.active_tab = tab;
    }

    /// Commit a range: normalize, store, and re-derive the tab so the view
    /// matching the new selection is the active one.
    pub fn select(&mut self, range: DateRange) {
        let range = DateRange::new(range.from, range.to);
        debug!(from = %range.from.to_iso(), to = %range.to.to_iso(), "range committed");
        self.active_tab = classify(&range);
        self.day.sync_value(Some(&range));
        self.value = Some(range);
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.day.sync_value(None);
        self.active_tab = RangeKind::Days;
    }

    /// Compact label for the trigger button; `None` when nothing is picked.
    pub fn label(&self) -> Option<String> {
        self.value.as_ref().map(format_compact)
    }

    /// Day-explicit label for the footer.
    pub fn detail_label(&self) -> Option<String> {
        self.value.as_ref().map(format_full)
    }

    // ── Selector routing ──────────────────────────────────────────────────────

    pub fn day_selector(&self) -> &DaySelector {
        &self.day
    }

    pub fn click_day(&mut self, date: Date) {
        if date > self.today {
            return;
        }
        if let Some(range) = self.day.click(date) {
            self.select(range);
        }
    }

    pub fn hover_day(&mut self, date: Date) {
        if date <= self.today {
            self.day.hover(date);
        }
    }

    pub fn leave_day(&mut self) {
        self.day.hover_leave();
    }

    /// Pointer event for the active grid tab. Day gestures go through
    /// [`Self::click_day`] instead.
    pub fn grid_pointer(&mut self, event: PointerEvent) {
        let committed = match self.active_tab {
            RangeKind::Days => None,
            RangeKind::Month => self.months.pointer(event),
            RangeKind::Quarter => self.quarters.pointer(event),
            RangeKind::Half => self.halves.pointer(event),
            RangeKind::Year => self.years.pointer(event),
        };
        if let Some(range) = committed {
            self.select(range);
        }
    }

    /// Keyboard activation of a grid cell on the active tab.
    pub fn activate_cell(&mut self, index: usize) {
        let committed = match self.active_tab {
            RangeKind::Days => None,
            RangeKind::Month => self.months.activate(index),
            RangeKind::Quarter => self.quarters.activate(index),
            RangeKind::Half => self.halves.activate(index),
            RangeKind::Year => self.years.activate(index),
        };
        if let Some(range) = committed {
            self.select(range);
        }
    }

    /// Live preview from whichever selector owns the active tab.
    pub fn preview(&self) -> Option<DateRange> {
        match self.active_tab {
            RangeKind::Days => self.day.preview(),
            RangeKind::Month => self.months.preview(),
            RangeKind::Quarter => self.quarters.preview(),
            RangeKind::Half => self.halves.preview(),
            RangeKind::Year => self.years.preview(),
        }
    }

    pub fn months(&self) -> &PeriodGridView<crate::calendar::period::MonthPosition> {
        &self.months
    }

    pub fn quarters(&self) -> &PeriodGridView<crate::calendar::period::QuarterPosition> {
        &self.quarters
    }

    pub fn halves(&self) -> &PeriodGridView<crate::calendar::period::HalfPosition> {
        &self.halves
    }

    pub fn years(&self) -> &PeriodGridView<crate::calendar::period::YearPosition> {
        &self.years
    }

    /// Focusable cell count and column width of the active tab's grid, for
    /// the host's grid navigation.
    pub fn content_grid(&self) -> (usize, usize) {
        match self.active_tab {
            RangeKind::Days => (0, 7),
            RangeKind::Month => (self.months.focusable().len(), self.months.columns()),
            RangeKind::Quarter => (self.quarters.focusable().len(), self.quarters.columns()),
            RangeKind::Half => (self.halves.focusable().len(), self.halves.columns()),
            RangeKind::Year => (self.years.focusable().len(), self.years.columns()),
        }
    }

    // ── Presets ───────────────────────────────────────────────────────────────

    pub fn presets(&self) -> &PresetStore<S> {
        &self.presets
    }

    pub fn quick_presets(&self) -> &'static [QuickPreset] {
        if self.config.hide_quick_presets {
            &[]
        } else {
            &QUICK_PRESETS
        }
    }

    pub fn apply_quick(&mut self, range: QuickRange) {
        let resolved = range.resolve(self.today);
        self.select(resolved);
    }

    /// Apply a stored custom preset. Stale ids are a no-op.
    pub fn apply_preset(&mut self, id: &str) -> bool {
        let Some(preset) = self.presets.get(id) else {
            return false;
        };
        let range = preset_range(preset, self.today);
        self.select(range);
        true
    }

    /// Hover preview for a preset row in the sidebar.
    pub fn preset_preview(&self, id: &str) -> Option<DateRange> {
        let preset = self.presets.get(id)?;
        Some(preset_range(preset, self.today))
    }

    /// Shortcut dispatch; runs before navigation so text-entry suppression
    /// is decided here. Returns true when the key applied a preset.
    pub fn handle_shortcut(&mut self, key: KeyEvent, text_entry_focused: bool) -> bool {
        if self.mode != SurfaceMode::Browsing {
            return false;
        }
        let Some(&range) = self.shortcuts.resolve(key, text_entry_focused) else {
            return false;
        };
        self.apply_quick(range);
        true
    }

    // ── Preset form (mode machine) ────────────────────────────────────────────

    pub fn mode(&self) -> &SurfaceMode {
        &self.mode
    }

    pub fn draft(&self) -> PresetDraft {
        self.draft
    }

    pub fn begin_create(&mut self) {
        if self.config.hide_custom_presets {
            return;
        }
        self.draft = PresetDraft::default();
        self.mode = SurfaceMode::CreatingPreset;
    }

    pub fn begin_edit(&mut self, id: &str) {
        if self.config.hide_custom_presets {
            return;
        }
        let Some(preset) = self.presets.get(id) else {
            return;
        };
        self.draft = PresetDraft {
            mode: preset.mode,
            count: preset.count,
            unit: preset.unit,
        };
        self.mode = SurfaceMode::EditingPreset(id.to_string());
    }

    pub fn set_draft(&mut self, mode: PresetMode, count: u32, unit: RelativeUnit) {
        self.draft = PresetDraft {
            mode,
            count: count.max(1),
            unit,
        };
    }

    /// The range the current draft would select, shown in the form preview.
    pub fn draft_preview(&self) -> DateRange {
        match self.draft.mode {
            PresetMode::This => {
                crate::calendar::relative::this_period(self.draft.unit, self.today)
            }
            PresetMode::Last => crate::calendar::relative::last_complete(
                self.draft.unit,
                self.draft.count.max(1),
                self.today,
            ),
        }
    }

    pub fn draft_label(&self) -> String {
        preset_label(self.draft.mode, self.draft.count, self.draft.unit)
    }

    pub fn cancel_form(&mut self) {
        self.mode = SurfaceMode::Browsing;
    }

    /// Save the draft: append when creating, rewrite in place when editing.
    pub fn submit_form(&mut self) {
        match std::mem::take(&mut self.mode) {
            SurfaceMode::Browsing => {}
            SurfaceMode::CreatingPreset => {
                self.presets
                    .add(self.draft.mode, self.draft.count, self.draft.unit);
            }
            SurfaceMode::EditingPreset(id) => {
                self.presets
                    .update(&id, self.draft.mode, self.draft.count, self.draft.unit);
            }
        }
        self.mode = SurfaceMode::Browsing;
    }

    pub fn remove_preset(&mut self, id: &str) {
        self.presets.remove(id);
        if self.mode == SurfaceMode::EditingPreset(id.to_string()) {
            self.mode = SurfaceMode::Browsing;
        }
    }

    // ── Focus sections ────────────────────────────────────────────────────────

    /// Section layout for Tab traversal, derived from the current mode.
    ///
    /// Browsing: sidebar (quick presets, custom presets, create button),
    /// the five tab triggers, then the content grid entered at its last
    /// (most recent) cell. Form modes collapse to the form's own items.
    pub fn sections(&self) -> Vec<SectionDef> {
        match self.mode {
            SurfaceMode::Browsing => {
                let mut sidebar = self.quick_presets().len();
                if !self.config.hide_custom_presets {
                    sidebar += self.presets.len() + 1; // +1: create button
                }
                let (content_len, _) = self.content_grid();
                vec![
                    SectionDef::new(sidebar).vertical_arrows(),
                    SectionDef::new(5),
                    SectionDef::new(content_len).enter_at_last(),
                ]
            }
            SurfaceMode::CreatingPreset | SurfaceMode::EditingPreset(_) => {
                // Mode select, count (Last only), unit select, save, cancel.
                let items = if self.draft.mode == PresetMode::Last {
                    5
                } else {
                    4
                };
                vec![SectionDef::new(items)]
            }
        }
    }
}
