pub mod grid;
pub mod section;
pub mod shortcuts;

pub use grid::{GridNav, GridNavOutcome};
pub use section::{SectionDef, SectionNav, SectionNavOutcome};
pub use shortcuts::{Shortcut, ShortcutMap};
