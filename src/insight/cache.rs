//! Insight cache
//!
//! In-memory map from a milestone's cache key to previously resolved insight
//! text. Entries are write-once: the first insert for a key wins and later
//! inserts are no-ops, so a cached insight is stable for the session.
//!
//! The cache is owned by the UI-thread insight state. Worker and scheduler
//! threads never touch it directly; their results arrive over the response
//! channel and are inserted at the event-loop poll point, so no lock is
//! needed. Growth is bounded by the fixed catalog, so there is no eviction.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct InsightCache {
    entries: HashMap<String, String>,
}

impl InsightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure lookup, no side effects.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert a resolved insight. The first write for a key wins; repeated
    /// writes for the same key leave the original value in place.
    ///
    /// Returns true if the value was stored, false if the key already held
    /// an entry.
    pub fn insert(&mut self, key: String, value: String) -> bool {
        use std::collections::hash_map::Entry;
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the currently cached keys, taken by the prefetch planner
    /// so the scheduler can skip entries that are already resolved.
    pub fn cached_keys(&self) -> HashSet<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_cache() {
        let cache = InsightCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get("1996-The Beginning"), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = InsightCache::new();
        assert!(cache.insert("1996-The Beginning".into(), "Red and Green.".into()));
        assert_eq!(cache.get("1996-The Beginning"), Some("Red and Green."));
        assert!(cache.contains("1996-The Beginning"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_write_once_semantics() {
        let mut cache = InsightCache::new();
        assert!(cache.insert("k".into(), "first".into()));
        assert!(!cache.insert("k".into(), "second".into()));
        assert_eq!(cache.get("k"), Some("first"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_keys_snapshot() {
        let mut cache = InsightCache::new();
        cache.insert("a".into(), "1".into());
        cache.insert("b".into(), "2".into());
        let snapshot = cache.cached_keys();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains("a"));
        assert!(snapshot.contains("b"));

        // The snapshot is detached from later writes
        cache.insert("c".into(), "3".into());
        assert!(!snapshot.contains("c"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Repeated writes for the same key never panic and never change the
        // first stored value.
        #[test]
        fn prop_repeated_writes_are_idempotent(
            key in "[a-zA-Z0-9 -]{1,40}",
            first in "[a-zA-Z0-9 ]{1,80}",
            rest in prop::collection::vec("[a-zA-Z0-9 ]{1,80}", 0..5),
        ) {
            let mut cache = InsightCache::new();
            prop_assert!(cache.insert(key.clone(), first.clone()));
            for value in rest {
                cache.insert(key.clone(), value);
            }
            prop_assert_eq!(cache.get(&key), Some(first.as_str()));
            prop_assert_eq!(cache.len(), 1);
        }
    }
}
