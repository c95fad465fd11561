//! In-process gym cache, filled from earlier gym events or a JSON snapshot.

use crate::error::{read_file, Result};
use eggwatch_core::{Field, GymCache, Unknown};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Open raid slots per gym id.
///
/// Snapshot format: `{"gym_slots": {"<gym id>": <slots>, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCache {
    #[serde(default)]
    gym_slots: HashMap<String, i64>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }

    /// Records the latest slot count seen for `gym_id`.
    pub fn update_slots(&mut self, gym_id: impl Into<String>, slots: i64) {
        self.gym_slots.insert(gym_id.into(), slots);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gym_slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gym_slots.is_empty()
    }
}

impl GymCache for MemoryCache {
    fn slots_for(&self, gym_id: &str) -> Field<i64> {
        Field::from_option(self.gym_slots.get(gym_id).copied(), Unknown::Tiny)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn miss_is_unknown_not_error() {
        let cache = MemoryCache::new();
        assert_eq!(cache.slots_for("G1"), Field::Unknown(Unknown::Tiny));
    }

    #[test]
    fn latest_update_wins() {
        let mut cache = MemoryCache::new();
        cache.update_slots("G1", 5);
        cache.update_slots("G1", 2);
        assert_eq!(cache.slots_for("G1"), Field::Known(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn snapshot_deserializes() {
        let cache = MemoryCache::from_json(r#"{"gym_slots": {"G1": 2, "G2": 0}}"#)
            .expect("should parse cache snapshot");
        assert_eq!(cache.slots_for("G2"), Field::Known(0));
        assert!(MemoryCache::from_json("{}").expect("empty snapshot").is_empty());
    }
}
