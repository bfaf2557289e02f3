//! Insertion — one new focused node per update, side pointers reused
//! from the replaced path.

use std::hash::Hash;

use crate::arena::MapArena;
use crate::bucket::CollisionBucket;
use crate::node::{FocusedNode, KeyValue, NodeRef};
use crate::ops::get::{find_hash_recording, focused_value, SidePath};
use crate::stamp::{HashStamp, STAMP_BITS};

/// Binds `key` to `value` in the tree rooted at `root`.
///
/// Returns the root of the new version, or `None` when `key` already
/// reads as `value` (including an unbound key paired with the default),
/// in which case the caller keeps its existing root pointer.
pub(crate) fn add<'a, K, V>(
    arena: &'a MapArena,
    root: NodeRef<'a, K, V>,
    def_value: &V,
    key: K,
    value: V,
) -> Option<&'a FocusedNode<'a, K, V>>
where
    K: Hash + Ord + Clone,
    V: PartialEq + Clone,
{
    let key_hash = HashStamp::of(&key);
    let mut path: SidePath<'a, K, V> = [None; STAMP_BITS];
    let (old, length) = find_hash_recording(root, key_hash, &mut path);

    if *focused_value(old, &key, def_value) == value {
        return None;
    }

    // A bucket is needed whenever the stamp is already occupied by
    // something other than this exact key alone.
    let more = match old {
        Some(node) if node.more.is_some() || node.key_value.key != key => Some(match node.more {
            Some(bucket) => bucket.with_entry(arena, key.clone(), value.clone()),
            None => CollisionBucket::from_pair(
                arena,
                node.key_value.clone(),
                KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                },
            ),
        }),
        _ => None,
    };

    Some(arena.alloc(FocusedNode::new(
        KeyValue { key, value },
        key_hash,
        more,
        arena.alloc_sides(&path[..length]),
    )))
}
