//! Persisted custom-preset list.
//!
//! Persistence is an injected key-value collaborator; the store keeps the
//! in-memory list and the stored blob consistent by re-serializing the whole
//! list after every mutation. Loading is best-effort: a missing or mangled
//! blob is an empty list, never an error.

use crate::calendar::relative::RelativeUnit;
use crate::presets::model::{CustomPreset, PresetMode, preset_label};
use indexmap::IndexMap;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::warn;

pub const PRESET_STORAGE_KEY: &str = "date-picker-custom-presets";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize presets: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal persistence boundary the host plugs in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory backend, used by tests and by hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

pub struct PresetStore<S: KeyValueStore> {
    backend: S,
    key: String,
    presets: IndexMap<String, CustomPreset>,
    seq: u64,
}

impl<S: KeyValueStore> PresetStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, PRESET_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let presets = load_presets(&backend, &key);
        Self {
            backend,
            key,
            presets,
            seq: 0,
        }
    }

    /// Insertion order; `update` keeps a preset in place.
    pub fn list(&self) -> impl Iterator<Item = &CustomPreset> {
        self.presets.values()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CustomPreset> {
        self.presets.get(id)
    }

    pub fn add(&mut self, mode: PresetMode, count: u32, unit: RelativeUnit) -> &CustomPreset {
        let count = count.max(1);
        let created_at = unix_millis();
        let id = format!("preset-{created_at}-{}", self.seq);
        self.seq += 1;

        let preset = CustomPreset {
            id: id.clone(),
            mode,
            count,
            unit,
            label: preset_label(mode, count, unit),
            created_at,
        };
        self.presets.insert(id.clone(), preset);
        self.persist();
        &self.presets[&id]
    }

    /// Replaces mode/count/unit and regenerates the label, preserving id,
    /// creation time and list position. A stale id is a no-op; deletion
    /// races are expected, not errors.
    pub fn update(&mut self, id: &str, mode: PresetMode, count: u32, unit: RelativeUnit) {
        let Some(preset) = self.presets.get_mut(id) else {
            return;
        };
        let count = count.max(1);
        preset.mode = mode;
        preset.count = count;
        preset.unit = unit;
        preset.label = preset_label(mode, count, unit);
        self.persist();
    }

    /// Idempotent; removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) {
        if self.presets.shift_remove(id).is_some() {
            self.persist();
        }
    }

    fn persist(&mut self) {
        let list: Vec<&CustomPreset> = self.presets.values().collect();
        match serde_json::to_string(&list) {
            Ok(blob) => self.backend.set(&self.key, &blob),
            Err(err) => {
                // Keep the in-memory list usable even if the blob is lost.
                warn!(error = %StoreError::from(err), "failed to persist presets");
            }
        }
    }
}

fn load_presets<S: KeyValueStore>(backend: &S, key: &str) -> IndexMap<String, CustomPreset> {
    let Some(blob) = backend.get(key) else {
        return IndexMap::new();
    };
    match serde_json::from_str::<Vec<CustomPreset>>(&blob) {
        Ok(list) => list.into_iter().map(|p| (p.id.clone(), p)).collect(),
        Err(err) => {
            warn!(%err, "malformed preset blob, starting with an empty list");
            IndexMap::new()
        }
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PresetStore<MemoryStore> {
        PresetStore::new(MemoryStore::new())
    }

    #[test]
    fn add_then_list() {
        let mut store = store();
        store.add(PresetMode::Last, 1, RelativeUnit::Months);

        let labels: Vec<&str> = store.list().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Last 1 Month"]);
    }

    #[test]
    fn update_regenerates_label_in_place() {
        let mut store = store();
        let id = store.add(PresetMode::Last, 1, RelativeUnit::Months).id.clone();
        store.add(PresetMode::Last, 7, RelativeUnit::Days);

        store.update(&id, PresetMode::This, 1, RelativeUnit::Days);

        let first = store.list().next().expect("first preset");
        assert_eq!(first.id, id);
        assert_eq!(first.label, "This Day");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_with_stale_id_is_a_no_op() {
        let mut store = store();
        store.add(PresetMode::Last, 2, RelativeUnit::Weeks);
        store.update("preset-gone", PresetMode::This, 1, RelativeUnit::Days);

        assert_eq!(store.len(), 1);
        assert_eq!(store.list().next().unwrap().label, "Last 2 Weeks");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = store();
        let id = store.add(PresetMode::Last, 1, RelativeUnit::Years).id.clone();

        store.remove(&id);
        assert_eq!(store.len(), 0);
        store.remove(&id);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_clamps_count() {
        let mut store = store();
        let preset = store.add(PresetMode::Last, 0, RelativeUnit::Days);
        assert_eq!(preset.count, 1);
        assert_eq!(preset.label, "Last 1 Day");
    }

    #[test]
    fn persists_and_reloads_through_the_backend() {
        let mut backend = MemoryStore::new();
        {
            let mut store = PresetStore::with_key(
                std::mem::take(&mut backend),
                PRESET_STORAGE_KEY,
            );
            store.add(PresetMode::Last, 3, RelativeUnit::Months);
            store.add(PresetMode::This, 1, RelativeUnit::Years);
            backend = store.backend;
        }

        let reloaded = PresetStore::new(backend);
        let labels: Vec<&str> = reloaded.list().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Last 3 Months", "This Year"]);
    }

    #[test]
    fn malformed_blob_degrades_to_empty() {
        let mut backend = MemoryStore::new();
        backend.set(PRESET_STORAGE_KEY, "{not json");

        let store = PresetStore::new(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut store = store();
        let a = store.add(PresetMode::Last, 1, RelativeUnit::Days).id.clone();
        let b = store.add(PresetMode::Last, 1, RelativeUnit::Days).id.clone();
        assert_ne!(a, b);
    }
}
