//! Map handle — a small value pairing a root node with a default value
//! and the arena the tree lives in.

use std::fmt;
use std::hash::Hash;
use std::ops;
use std::ptr;

use crate::arena::MapArena;
use crate::iter::{Iter, ZipIter};
use crate::node::NodeRef;
use crate::ops::get::{find_hash, focused_value};
use crate::ops::insert;
use crate::stamp::HashStamp;

/// Persistent map from every `K` to a `V`, defaulting to a fixed value.
///
/// The map is conceptually total: a key never bound (or bound back to the
/// default) reads as the default value, and iteration enumerates exactly
/// the keys bound to something else. Updates are functional —
/// [`add`](Self::add) builds a new version without touching existing
/// nodes, so every previously obtained handle stays valid and observable.
///
/// Handles are cheap values; cloning one copies a pointer and the default
/// value. All structure lives in a caller-owned [`MapArena`] that the
/// handle borrows, which is also why sharing a handle across threads is
/// ruled out: growing the tree allocates through that shared borrow.
pub struct PersistentMap<'a, K, V> {
    root: NodeRef<'a, K, V>,
    def_value: V,
    arena: &'a MapArena,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl<'a, K, V> PersistentMap<'a, K, V> {
    /// Creates a map binding every key to `def_value`.
    #[must_use]
    pub const fn with_default(arena: &'a MapArena, def_value: V) -> Self {
        Self {
            root: None,
            def_value,
            arena,
        }
    }

    /// The value every unbound key reads as.
    #[must_use]
    pub const fn default_value(&self) -> &V {
        &self.def_value
    }

    /// Depth of the most recently added leaf — a cheap estimate of the
    /// tree size.
    #[must_use]
    pub fn last_depth(&self) -> usize {
        self.root.map_or(0, |node| node.length())
    }

    /// Returns `true` if both handles share the same root node.
    ///
    /// Binding a key to the value it already reads as keeps the root, so
    /// this also detects no-op updates.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self.root, other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<'a, K, V: Default> PersistentMap<'a, K, V> {
    /// Creates a map with `V::default()` as the default value.
    #[must_use]
    pub fn new(arena: &'a MapArena) -> Self {
        Self::with_default(arena, V::default())
    }
}

// ---------------------------------------------------------------------------
// Read operations — K: Hash + Ord
// ---------------------------------------------------------------------------

impl<'a, K: Hash + Ord, V> PersistentMap<'a, K, V> {
    /// Returns the value bound to `key`, or the map's default.
    #[must_use]
    pub fn get(&self, key: &K) -> &V {
        focused_value(find_hash(self.root, HashStamp::of(key)), key, &self.def_value)
    }
}

// ---------------------------------------------------------------------------
// Write operations — K: Hash + Ord + Clone, V: PartialEq + Clone
// ---------------------------------------------------------------------------

impl<'a, K: Hash + Ord + Clone, V: PartialEq + Clone> PersistentMap<'a, K, V> {
    /// Returns a new version with `key` bound to `value`.
    ///
    /// Binding a key to the value it already reads as returns a handle
    /// with the same root pointer. Binding a key to the default value
    /// removes it from iteration; the node stays in the tree, so prior
    /// versions keep their identity.
    #[must_use]
    pub fn add(&self, key: K, value: V) -> Self {
        let root = match insert::add(self.arena, self.root, &self.def_value, key, value) {
            Some(node) => Some(node),
            None => self.root,
        };
        Self {
            root,
            def_value: self.def_value.clone(),
            arena: self.arena,
        }
    }

    /// Rebinds this handle to the result of [`add`](Self::add).
    ///
    /// Handles obtained earlier are unaffected.
    pub fn set(&mut self, key: K, value: V) {
        *self = self.add(key, value);
    }
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

impl<'a, K, V: PartialEq> PersistentMap<'a, K, V> {
    /// Iterates over the `(key, value)` pairs bound to non-default
    /// values, in increasing (stamp, key) order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root, &self.def_value)
    }
}

impl<'a, K: Ord, V: PartialEq> PersistentMap<'a, K, V> {
    /// Traverses `self` and `other` in lock step, yielding
    /// `(key, value_in_self, value_in_other)` for every key bound to a
    /// non-default value on at least one side.
    #[must_use]
    pub fn zip<'s>(&'s self, other: &'s Self) -> ZipIter<'s, K, V> {
        ZipIter::new(self.root, &self.def_value, other.root, &other.def_value)
    }
}

// ---------------------------------------------------------------------------
// Trait impls — manual where derives would demand false `K` bounds
// ---------------------------------------------------------------------------

impl<K, V: Clone> Clone for PersistentMap<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            def_value: self.def_value.clone(),
            arena: self.arena,
        }
    }
}

impl<K, V: Copy> Copy for PersistentMap<'_, K, V> {}

impl<K: Ord, V: PartialEq> PartialEq for PersistentMap<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.def_value != other.def_value {
            return false;
        }
        self.zip(other).all(|(_, a, b)| a == b)
    }
}

impl<K: Ord, V: Eq> Eq for PersistentMap<'_, K, V> {}

impl<K, V> fmt::Debug for PersistentMap<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentMap")
            .field("last_depth", &self.last_depth())
            .field("bound", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

impl<K: fmt::Display, V: fmt::Display + PartialEq> fmt::Display for PersistentMap<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (pos, (key, value)) in self.iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<'a, K: Hash + Ord + Clone, V: PartialEq + Clone> Extend<(K, V)> for PersistentMap<'a, K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K: Hash + Ord, V> ops::Index<&K> for PersistentMap<'a, K, V> {
    type Output = V;

    // Indexing is total: unbound keys yield the default value.
    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

impl<'s, 'a, K, V: PartialEq> IntoIterator for &'s PersistentMap<'a, K, V> {
    type Item = (&'s K, &'s V);
    type IntoIter = Iter<'s, K, V>;

    fn into_iter(self) -> Iter<'s, K, V> {
        self.iter()
    }
}
