//! Focused-path node: one node standing for every tree level along a
//! single root-to-leaf path.

use std::fmt;

use crate::bucket::CollisionBucket;
use crate::stamp::{Bit, HashStamp, STAMP_BITS};

/// A key together with its bound value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValue<K, V> {
    /// The key.
    pub key: K,
    /// The value bound to it.
    pub value: V,
}

/// Reference to a node, or `None` for a subtree holding only defaults.
pub type NodeRef<'a, K, V> = Option<&'a FocusedNode<'a, K, V>>;

/// Immutable tree node focused on one leaf.
///
/// In a conventional tree the nodes along a root-to-leaf path form a
/// linked list whose payload is the pointers leaving the path. A
/// `FocusedNode` stores those leaving pointers directly, one per level,
/// together with the key, value and stamp of the leaf the path ends in.
/// The stamp's bit at each level tells which side the path continues on,
/// so one node value represents the tree node at every depth along its
/// path: interpreted at depth `d`, its focused-side child is the node
/// itself (at depth `d + 1`) and its off-side child is
/// [`side`](Self::side)`(d)`.
///
/// Nodes are immutable once built; the same node may be shared by many
/// map versions and referenced at many depths.
pub struct FocusedNode<'a, K, V> {
    /// The focused leaf. When [`more`](Self::more) is present, this is
    /// one arbitrary representative of the bucket.
    pub key_value: KeyValue<K, V>,
    /// Stamp of the focused key; doubles as the path address.
    pub key_hash: HashStamp,
    /// Out-of-line storage for keys colliding on the full stamp.
    pub more: Option<&'a CollisionBucket<'a, K, V>>,
    /// One pointer per level of the focused path, each to the subtree on
    /// the opposite side at that level. Lives in the same arena as the
    /// node itself.
    sides: &'a [NodeRef<'a, K, V>],
}

impl<'a, K, V> FocusedNode<'a, K, V> {
    pub(crate) fn new(
        key_value: KeyValue<K, V>,
        key_hash: HashStamp,
        more: Option<&'a CollisionBucket<'a, K, V>>,
        sides: &'a [NodeRef<'a, K, V>],
    ) -> Self {
        debug_assert!(sides.len() <= STAMP_BITS);
        Self {
            key_value,
            key_hash,
            more,
            sides,
        }
    }

    /// Number of side pointers, i.e. the depth of the focused leaf.
    #[must_use]
    pub fn length(&self) -> usize {
        self.sides.len()
    }

    /// Side pointer at `level`; `None` past the focused depth (such a
    /// subtree holds only default bindings).
    #[must_use]
    pub fn side(&self, level: usize) -> NodeRef<'a, K, V> {
        self.sides.get(level).copied().flatten()
    }

    /// The child of the node this value represents at `level`, on the
    /// given side: the node itself when the focused path continues there,
    /// the stored side pointer otherwise.
    #[must_use]
    pub fn child(&'a self, level: usize, bit: Bit) -> NodeRef<'a, K, V> {
        if self.key_hash.bit(level) == bit {
            Some(self)
        } else {
            self.side(level)
        }
    }
}

impl<K, V> fmt::Debug for FocusedNode<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusedNode")
            .field("key_hash", &self.key_hash)
            .field("length", &self.sides.len())
            .field("collisions", &self.more.is_some())
            .finish_non_exhaustive()
    }
}
