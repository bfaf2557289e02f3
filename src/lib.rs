//! Persistent map over hash trees with focused-path nodes.
//!
//! A [`PersistentMap`] is conceptually total: every key of the key type
//! reads as a fixed default value until bound to something else, and
//! removal is just binding back to the default. Updates are functional —
//! [`PersistentMap::add`] builds a new version in O(log n) time and
//! space while every previously obtained handle stays valid — so keeping
//! any number of versions alive costs nothing beyond the nodes they
//! already share.
//!
//! The tree is addressed by 32-bit key hashes read MSB-first. Each node
//! folds an entire root-to-leaf path into itself: instead of one node per
//! level, it stores one side pointer per level plus the focused leaf the
//! path ends in, so an update allocates a single node regardless of
//! depth.
//!
//! # Key properties
//!
//! - **O(1) version retention**: handles are small values sharing nodes
//! - **One allocation per update**: a focused path replaces per-level nodes
//! - **Deterministic iteration**: increasing (hash, key) order, default
//!   bindings filtered out
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! All nodes live in a caller-owned [`MapArena`] that outlives every
//! handle; memory is reclaimed by dropping the arena. Hashes should have
//! high entropy in their high bits — the built-in hashing takes care of
//! this even for dense integer keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bucket;
pub mod iter;
pub mod node;
pub mod stamp;

mod arena;
mod map;
mod ops;

#[cfg(test)]
mod tests;

pub use arena::MapArena;
pub use map::PersistentMap;
