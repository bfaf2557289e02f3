//! Iteration — in-order traversal and lock-step zip over two maps.
//!
//! Both iterators enumerate entries in strictly increasing (stamp, key)
//! order and never rest on a value equal to the map's default: such
//! bindings read as "absent" everywhere.

use std::cmp::Ordering;

use crate::node::{FocusedNode, NodeRef};
use crate::stamp::{Bit, STAMP_BITS};

/// Traversal position inside one map: the focused node currently
/// visited, the level it was reached at, and the unexplored siblings
/// saved on the way down — one slot per level, like a DFS stack.
struct Cursor<'a, K, V> {
    current: NodeRef<'a, K, V>,
    level: usize,
    path: [NodeRef<'a, K, V>; STAMP_BITS],
    /// Position inside `current`'s collision bucket, when it has one.
    bucket_pos: usize,
    def_value: &'a V,
}

impl<'a, K, V> Cursor<'a, K, V> {
    fn end(def_value: &'a V) -> Self {
        Self {
            current: None,
            level: 0,
            path: [None; STAMP_BITS],
            bucket_pos: 0,
            def_value,
        }
    }

    fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Key of the current entry. The cursor must not be at the end.
    fn key(&self) -> &'a K {
        let node = self.current.expect("cursor advanced past the end");
        match node.more {
            Some(bucket) => &bucket.entry(self.bucket_pos).key,
            None => &node.key_value.key,
        }
    }

    /// Value of the current entry. The cursor must not be at the end.
    fn value(&self) -> &'a V {
        let node = self.current.expect("cursor advanced past the end");
        match node.more {
            Some(bucket) => &bucket.entry(self.bucket_pos).value,
            None => &node.key_value.value,
        }
    }
}

impl<'a, K, V: PartialEq> Cursor<'a, K, V> {
    /// Positions a cursor on the first entry of the tree bound to a
    /// non-default value; the result is at the end if there is none.
    fn begin(root: &'a FocusedNode<'a, K, V>, def_value: &'a V) -> Self {
        let mut cursor = Self::end(def_value);
        cursor.current = Some(find_leftmost(root, &mut cursor.level, &mut cursor.path));
        if cursor.value() == def_value {
            cursor.advance();
        }
        cursor
    }

    /// Steps to the next entry bound to a non-default value.
    fn advance(&mut self) {
        loop {
            let current = match self.current {
                Some(node) => node,
                // Already past the end.
                None => return,
            };
            if let Some(bucket) = current.more {
                self.bucket_pos += 1;
                if self.bucket_pos < bucket.len() {
                    if self.value() != self.def_value {
                        return;
                    }
                    continue;
                }
            }
            // Climb until coming up from a left side that has an
            // unexplored right sibling.
            loop {
                if self.level == 0 {
                    self.current = None;
                    return;
                }
                self.level -= 1;
                if current.key_hash.bit(self.level) == Bit::Left
                    && self.path[self.level].is_some()
                {
                    break;
                }
            }
            let sibling = self.path[self.level].expect("climb stopped on an absent sibling");
            self.level += 1;
            self.current = Some(find_leftmost(sibling, &mut self.level, &mut self.path));
            self.bucket_pos = 0;
            if self.value() != self.def_value {
                return;
            }
        }
    }
}

impl<K: Ord, V> Cursor<'_, K, V> {
    /// Orders two positions by (stamp, key); the end sorts after every
    /// entry, so lock-step traversal drains the longer side last.
    fn position_cmp(&self, other: &Self) -> Ordering {
        match (self.current, other.current) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a
                .key_hash
                .cmp(&b.key_hash)
                .then_with(|| self.key().cmp(other.key())),
        }
    }
}

/// Descends to the leftmost leaf below `start` (reached at `*level`),
/// pushing the sibling not taken at every step onto `path`.
fn find_leftmost<'a, K, V>(
    start: &'a FocusedNode<'a, K, V>,
    level: &mut usize,
    path: &mut [NodeRef<'a, K, V>; STAMP_BITS],
) -> &'a FocusedNode<'a, K, V> {
    let mut current = start;
    while *level < current.length() {
        if let Some(child) = current.child(*level, Bit::Left) {
            path[*level] = current.child(*level, Bit::Right);
            current = child;
        } else if let Some(child) = current.child(*level, Bit::Right) {
            path[*level] = current.child(*level, Bit::Left);
            current = child;
        } else {
            unreachable!("a node on the focused path always has a child");
        }
        *level += 1;
    }
    current
}

/// In-order iterator over the pairs of a map bound to non-default
/// values, in increasing (stamp, key) order.
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
}

impl<'a, K, V: PartialEq> Iter<'a, K, V> {
    pub(crate) fn new(root: NodeRef<'a, K, V>, def_value: &'a V) -> Self {
        let cursor = match root {
            Some(node) => Cursor::begin(node, def_value),
            None => Cursor::end(def_value),
        };
        Self { cursor }
    }
}

impl<'a, K, V: PartialEq> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_end() {
            return None;
        }
        let item = (self.cursor.key(), self.cursor.value());
        self.cursor.advance();
        Some(item)
    }
}

/// Lock-step iterator over two maps, yielding `(key, value_a, value_b)`
/// for every key bound to a non-default value on at least one side.
///
/// The side currently holding the smaller (stamp, key) position is
/// emitted with the other side's default filling the absent slot; equal
/// positions are emitted and advanced together, which is how matching
/// keys meet.
pub struct ZipIter<'a, K, V> {
    first: Cursor<'a, K, V>,
    second: Cursor<'a, K, V>,
}

impl<'a, K, V: PartialEq> ZipIter<'a, K, V> {
    pub(crate) fn new(
        first_root: NodeRef<'a, K, V>,
        first_def: &'a V,
        second_root: NodeRef<'a, K, V>,
        second_def: &'a V,
    ) -> Self {
        let first = match first_root {
            Some(node) => Cursor::begin(node, first_def),
            None => Cursor::end(first_def),
        };
        let second = match second_root {
            Some(node) => Cursor::begin(node, second_def),
            None => Cursor::end(second_def),
        };
        Self { first, second }
    }
}

impl<'a, K: Ord, V: PartialEq> Iterator for ZipIter<'a, K, V> {
    type Item = (&'a K, &'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.first.position_cmp(&self.second) {
            Ordering::Equal => {
                if self.first.is_end() {
                    return None;
                }
                let item = (self.first.key(), self.first.value(), self.second.value());
                self.first.advance();
                self.second.advance();
                Some(item)
            }
            Ordering::Less => {
                let item = (self.first.key(), self.first.value(), self.second.def_value);
                self.first.advance();
                Some(item)
            }
            Ordering::Greater => {
                let item = (self.second.key(), self.first.def_value, self.second.value());
                self.second.advance();
                Some(item)
            }
        }
    }
}
