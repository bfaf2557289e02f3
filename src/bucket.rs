//! Collision bucket — key-ordered storage for full-stamp collisions.

use std::fmt;

use crate::arena::MapArena;
use crate::node::KeyValue;

/// Key-ordered mapping over distinct keys sharing one full 32-bit stamp.
///
/// A bucket is an immutable run of entries in the arena, sorted by key
/// and rebuilt as a whole on every insert. It exists only when at least
/// two keys collide; the owning node's inline pair is then just a
/// representative, and the bucket is authoritative.
pub struct CollisionBucket<'a, K, V> {
    entries: &'a [KeyValue<K, V>],
}

impl<'a, K, V> CollisionBucket<'a, K, V> {
    /// Number of entries. Always at least 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a bucket without entries is never built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `pos` in ascending key order.
    #[must_use]
    pub fn entry(&self, pos: usize) -> &'a KeyValue<K, V> {
        &self.entries[pos]
    }

    /// All entries, in ascending key order.
    #[must_use]
    pub fn entries(&self) -> &'a [KeyValue<K, V>] {
        self.entries
    }
}

impl<'a, K: Ord, V> CollisionBucket<'a, K, V> {
    /// Returns the value bound to `key`, if the bucket holds it.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.entries
            .binary_search_by(|entry| entry.key.cmp(key))
            .ok()
            .map(|pos| &self.entries[pos].value)
    }
}

impl<'a, K: Ord + Clone, V: Clone> CollisionBucket<'a, K, V> {
    /// Builds a two-entry bucket from a colliding pair of distinct keys.
    pub(crate) fn from_pair(
        arena: &'a MapArena,
        first: KeyValue<K, V>,
        second: KeyValue<K, V>,
    ) -> &'a Self {
        debug_assert!(first.key != second.key);
        let entries = if first.key < second.key {
            vec![first, second]
        } else {
            vec![second, first]
        };
        arena.alloc(Self {
            entries: arena.alloc_entries(entries),
        })
    }

    /// Copies the bucket with `key` bound to `value`, replacing an
    /// existing entry or inserting a new one in key order.
    pub(crate) fn with_entry(&self, arena: &'a MapArena, key: K, value: V) -> &'a Self {
        let mut entries = self.entries.to_vec();
        match entries.binary_search_by(|entry| entry.key.cmp(&key)) {
            Ok(pos) => entries[pos] = KeyValue { key, value },
            Err(pos) => entries.insert(pos, KeyValue { key, value }),
        }
        arena.alloc(Self {
            entries: arena.alloc_entries(entries),
        })
    }
}

impl<K, V> fmt::Debug for CollisionBucket<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionBucket")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
