use crate::{MapArena, PersistentMap};

/// Binding a key to the default erases it from reads and iteration.
#[test]
fn set_to_default_erases() {
    let arena = MapArena::new();
    let map = PersistentMap::new(&arena).add("a", 1).add("b", 2);
    let map = map.add("a", 0);

    assert_eq!(*map.get(&"a"), 0);
    assert_eq!(*map.get(&"b"), 2);

    let keys: Vec<&str> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["b"]);
}

/// Binding an unbound key to the default is a no-op on the root.
#[test]
fn default_for_absent_key_keeps_root() {
    let arena = MapArena::new();
    let map = PersistentMap::new(&arena).add("a", 1);
    let same = map.add("b", 0);
    assert!(map.ptr_eq(&same));
}

/// An erased key can be bound again.
#[test]
fn rebind_after_erase() {
    let arena = MapArena::new();
    let map = PersistentMap::new(&arena).add("k", 5).add("k", 0).add("k", 7);
    assert_eq!(*map.get(&"k"), 7);
    assert_eq!(map.iter().count(), 1);
}

/// Erasing every key leaves an empty iteration even though nodes remain.
#[test]
fn erase_all_iterates_empty() {
    let arena = MapArena::new();
    let mut map = PersistentMap::new(&arena);
    for i in 0_u64..20 {
        map.set(i, 1);
    }
    for i in 0_u64..20 {
        map.set(i, 0);
    }
    assert_eq!(map.iter().count(), 0);
    assert!(map.last_depth() > 0);
}

/// With a non-zero default, zero is an ordinary storable value.
#[test]
fn non_zero_default() {
    let arena = MapArena::new();
    let map = PersistentMap::with_default(&arena, 9).add("a", 0).add("b", 9);

    assert_eq!(*map.get(&"a"), 0);
    assert_eq!(*map.get(&"b"), 9);

    let keys: Vec<&str> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["a"]);
}
