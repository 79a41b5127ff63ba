//! ordered-hash-map: a single-threaded chained hash map that iterates in
//! insertion order and grows by doubling its bucket index.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the ordering structure and the lookup structure separately
//!   owned so each can be reasoned about on its own.
//! - Layers:
//!   - EntryLog<K, V>: sole owner of entries. A doubly-linked,
//!     insertion-ordered list whose nodes live in a slot arena with
//!     generational keys, so handles stay stable and O(1) unlink needs no
//!     traversal.
//!   - OrderedHashMap<K, V, S>: public API. A bucket index of chains holding
//!     `EntryRef` handles into the log, placed by `hash mod bucket_count`,
//!     plus the doubling growth policy (20, 40, 80, ...).
//!
//! Constraints
//! - Single-threaded: the map is `!Sync` by construction; callers wanting
//!   cross-thread use must move it or serialize access externally.
//! - Duplicate inserts are silent no-ops: the first value for a key wins.
//! - Insertion order is the iteration order; it survives growth (the index
//!   is rebuilt, the log is not) and changes only on insert and remove.
//! - The bucket index holds non-owning handles only; it is never the last
//!   owner of an entry.
//!
//! Growth invariants
//! - The bucket count starts at 20 and doubles, eagerly and in one pass,
//!   whenever an insertion leaves `bucket_count <= len * 2`; removal never
//!   shrinks it.
//! - Each entry stores the `u64` hash computed at insert time; rebuilds
//!   re-index from the stored hash, so `K: Hash` is never invoked after
//!   insertion and growth runs no user code.
//!
//! Reentrancy policy
//! - A debug-only check at each public entry point panics if `K: Eq` or
//!   `K: Hash` code calls back into the same map while its internals are
//!   mid-mutation. Release builds compile the check away.
//!
//! Unsafe
//! - The single unsafe block sits in the log's mutable iterator; soundness
//!   is argued there from the acyclic-link invariant.

mod entry_log;
pub mod ordered_hash_map;
mod ordered_hash_map_proptest;
mod reentrancy;

// Public surface
pub use ordered_hash_map::{AccessError, EntryRef, OrderedHashMap};
