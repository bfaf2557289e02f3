//! Bump-arena storage backing nodes, side slices and buckets.

use bumpalo::Bump;

use crate::node::{KeyValue, NodeRef};

/// Arena owning every node, side-pointer slice and collision bucket of
/// the maps built on it.
///
/// Allocation is append-only: values are never freed individually, and
/// `Drop` impls of keys and values moved into the arena do not run. All
/// memory is reclaimed at once when the arena itself is dropped. Handles
/// borrow the arena, so the arena necessarily outlives every map version
/// built on it.
#[derive(Default)]
pub struct MapArena {
    bump: Bump,
}

impl MapArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Total bytes allocated so far, superseded versions included.
    ///
    /// Reflects the true memory footprint of every version ever built.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Moves `value` into the arena.
    pub(crate) fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Copies a recorded side-pointer path into the arena.
    pub(crate) fn alloc_sides<'a, K, V>(
        &'a self,
        sides: &[NodeRef<'a, K, V>],
    ) -> &'a [NodeRef<'a, K, V>] {
        self.bump.alloc_slice_copy(sides)
    }

    /// Moves a run of bucket entries into the arena.
    pub(crate) fn alloc_entries<'a, K, V>(
        &'a self,
        entries: Vec<KeyValue<K, V>>,
    ) -> &'a [KeyValue<K, V>] {
        self.bump.alloc_slice_fill_iter(entries)
    }
}
