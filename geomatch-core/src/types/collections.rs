//! Hash collection aliases used across the workspace.

/// Fast non-cryptographic hash map, used for focal-element and attribute tables.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Fast non-cryptographic hash set.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;
