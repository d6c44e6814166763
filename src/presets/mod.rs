pub mod model;
pub mod store;

pub use model::{CustomPreset, PresetMode, preset_label, preset_range};
pub use store::{KeyValueStore, MemoryStore, PRESET_STORAGE_KEY, PresetStore, StoreError};
