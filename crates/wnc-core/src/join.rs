// ── Secondary-collection index ──
//
// Merged records are built by looking up each primary entry's key in an
// index over every secondary collection. When a secondary collection holds
// several entries for one key, the earliest entry in collection order is
// the one that matches.

use std::collections::HashMap;
use std::hash::Hash;

/// Hash index over a borrowed collection where the first entry per key wins.
#[derive(Debug)]
pub struct FirstMatchIndex<'a, K, V> {
    entries: HashMap<K, &'a V>,
}

impl<'a, K, V> FirstMatchIndex<'a, K, V>
where
    K: Eq + Hash,
{
    /// Index `items` by `key`. Later duplicates are ignored.
    pub fn build<F>(items: &'a [V], key: F) -> Self
    where
        F: Fn(&'a V) -> K,
    {
        let mut entries = HashMap::with_capacity(items.len());
        for item in items {
            entries.entry(key(item)).or_insert(item);
        }
        Self { entries }
    }

    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FirstMatchIndex<'_, K, V>
where
    K: Eq + Hash,
    V: Clone + Default,
{
    /// Owned copy of the match, or the zero-valued placeholder.
    pub fn get_or_default(&self, key: &K) -> V {
        self.get(key).cloned().unwrap_or_default()
    }
}
