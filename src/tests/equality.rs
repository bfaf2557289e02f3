use crate::{MapArena, PersistentMap};

#[test]
fn cloned_handle_compares_equal_fast() {
    let arena = MapArena::new();
    let map = PersistentMap::new(&arena).add("a", 1);
    let copy = map.clone();
    assert!(map.ptr_eq(&copy));
    assert_eq!(map, copy);
}

#[test]
fn same_content_different_history() {
    let arena = MapArena::new();
    let empty = PersistentMap::new(&arena);
    let ab = empty.add("a", 1).add("b", 2);
    let ba = empty.add("b", 2).add("a", 1);

    assert!(!ab.ptr_eq(&ba));
    assert_eq!(ab, ba);
}

#[test]
fn differing_value_compares_unequal() {
    let arena = MapArena::new();
    let empty = PersistentMap::new(&arena);
    let one = empty.add("a", 1);
    let two = empty.add("a", 2);
    assert_ne!(one, two);
}

#[test]
fn differing_defaults_compare_unequal() {
    let arena = MapArena::new();
    let zero = PersistentMap::with_default(&arena, 0).add("a", 1);
    let nine = PersistentMap::with_default(&arena, 9).add("a", 1);
    assert_ne!(zero, nine);
}

/// Two everywhere-default maps share the absent root, so the identity
/// fast path applies before defaults are even looked at.
#[test]
fn empty_maps_share_root_identity() {
    let arena = MapArena::new();
    let zero: PersistentMap<'_, &str, i32> = PersistentMap::with_default(&arena, 0);
    let nine: PersistentMap<'_, &str, i32> = PersistentMap::with_default(&arena, 9);
    assert!(zero.ptr_eq(&nine));
}

#[test]
fn erased_equals_never_bound() {
    let arena = MapArena::new();
    let empty = PersistentMap::new(&arena);
    let bound = empty.add("a", 1);
    let erased = bound.add("a", 0);

    assert!(!erased.ptr_eq(&empty));
    assert_eq!(erased, empty);
}

#[test]
fn subset_compares_unequal() {
    let arena = MapArena::new();
    let empty = PersistentMap::new(&arena);
    let small = empty.add("a", 1);
    let big = small.add("b", 2);
    assert_ne!(small, big);
    assert_ne!(big, small);
}

#[test]
fn empty_maps_compare_equal() {
    let arena = MapArena::new();
    let a: PersistentMap<'_, u64, u64> = PersistentMap::new(&arena);
    let b: PersistentMap<'_, u64, u64> = PersistentMap::new(&arena);
    assert_eq!(a, b);
}
