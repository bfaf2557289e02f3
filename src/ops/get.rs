//! Lookup — stamp-guided descent along focused paths.

use crate::node::NodeRef;
use crate::stamp::{HashStamp, STAMP_BITS};

/// Side pointers recorded on the way down to a stamp, one slot per level.
pub(crate) type SidePath<'a, K, V> = [NodeRef<'a, K, V>; STAMP_BITS];

/// Finds the node whose focused stamp equals `hash`, if any.
///
/// Descends from `root`; at each node the search jumps directly to the
/// first bit at which `hash` leaves the node's focused path and follows
/// the side pointer stored there. Reaching an absent subtree means the
/// stamp is not in the tree.
pub(crate) fn find_hash<'a, K, V>(root: NodeRef<'a, K, V>, hash: HashStamp) -> NodeRef<'a, K, V> {
    let mut tree = root;
    while let Some(node) = tree {
        if node.key_hash == hash {
            break;
        }
        tree = node.side(node.key_hash.common_prefix_len(hash));
    }
    tree
}

/// Like [`find_hash`], but records into `path` the pointer that a node at
/// each traversed depth would expose on the side leaving the route to
/// `hash`. Returns the found node (`None` if the route ended in an absent
/// subtree) and the number of recorded levels.
///
/// When a node with the searched stamp is found, its remaining side
/// pointers are recorded as well, so the returned length covers the full
/// depth a replacement node must carry.
pub(crate) fn find_hash_recording<'a, K, V>(
    root: NodeRef<'a, K, V>,
    hash: HashStamp,
    path: &mut SidePath<'a, K, V>,
) -> (NodeRef<'a, K, V>, usize) {
    let mut tree = root;
    let mut level = 0;
    while let Some(node) = tree {
        if node.key_hash == hash {
            break;
        }
        let diverge = node.key_hash.common_prefix_len(hash);
        while level < diverge {
            path[level] = node.side(level);
            level += 1;
        }
        // At the divergence the node itself is the off-side subtree.
        path[level] = tree;
        tree = node.side(level);
        level += 1;
    }
    if let Some(node) = tree {
        while level < node.length() {
            path[level] = node.side(level);
            level += 1;
        }
    }
    (tree, level)
}

/// Resolves the value a candidate node binds to `key`.
///
/// A `None` candidate means the route to the key's stamp ended in an
/// absent subtree, so the key reads as the default.
pub(crate) fn focused_value<'a, K: Ord, V>(
    tree: NodeRef<'a, K, V>,
    key: &K,
    def_value: &'a V,
) -> &'a V {
    match tree {
        None => def_value,
        Some(node) => match node.more {
            Some(bucket) => bucket.get(key).unwrap_or(def_value),
            None if node.key_value.key == *key => &node.key_value.value,
            None => def_value,
        },
    }
}
