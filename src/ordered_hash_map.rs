//! OrderedHashMap: chained hash map with insertion-order iteration.
//!
//! The map couples two structures: the [`EntryLog`](crate::entry_log), which
//! owns every entry and fixes iteration order, and a bucket index of
//! `bucket_count` chains holding [`EntryRef`] handles into the log. A live
//! entry appears in exactly one chain, the one at `hash mod bucket_count`
//! under the current bucket count; growth rebuilds every chain to restore
//! that invariant.
//!
//! The bucket count starts at 20 and doubles, eagerly and in one pass,
//! whenever an insertion leaves `bucket_count <= len * 2`. Rebuilds re-index
//! from each entry's stored hash and never touch the log, so iteration order
//! and outstanding `EntryRef`s survive growth. Erase never shrinks.

use crate::entry_log::{self, EntryLog, LogKey};
use crate::reentrancy::ReentryCheck;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Bucket count of a freshly constructed map.
const INITIAL_BUCKETS: usize = 20;

/// Stable handle to a map entry, returned by `insert` and `find`.
///
/// A handle stays valid across growth (the index is rebuilt, the entry
/// arena is not) and goes permanently stale when its entry is removed;
/// stale handles resolve to `None` rather than aliasing a later entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntryRef(LogKey);

impl EntryRef {
    pub fn key<'a, K, V, S>(&self, map: &'a OrderedHashMap<K, V, S>) -> Option<&'a K>
    where
        K: Eq + Hash,
        S: BuildHasher,
    {
        map.handle_key(*self)
    }

    pub fn value<'a, K, V, S>(&self, map: &'a OrderedHashMap<K, V, S>) -> Option<&'a V>
    where
        K: Eq + Hash,
        S: BuildHasher,
    {
        map.handle_value(*self)
    }

    pub fn value_mut<'a, K, V, S>(&self, map: &'a mut OrderedHashMap<K, V, S>) -> Option<&'a mut V>
    where
        K: Eq + Hash,
        S: BuildHasher,
    {
        map.handle_value_mut(*self)
    }
}

/// Error returned by [`OrderedHashMap::at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    KeyNotFound,
}

pub struct OrderedHashMap<K, V, S = RandomState> {
    hasher: S,
    buckets: Vec<Vec<EntryRef>>,
    log: EntryLog<K, V>,
    reentrancy: ReentryCheck,
}

impl<K, V> OrderedHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for OrderedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(INITIAL_BUCKETS, Vec::new);
        Self {
            hasher,
            buckets,
            log: EntryLog::new(),
            reentrancy: ReentryCheck::new(),
        }
    }

    /// Returns the hasher by value.
    pub fn hash_function(&self) -> S
    where
        S: Clone,
    {
        self.hasher.clone()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Current bucket count. Starts at 20 and only ever doubles.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Insert `(key, value)` unless `key` is already present.
    ///
    /// Duplicate keys make this a silent no-op returning `None`: the stored
    /// value is kept, not overwritten (first occurrence wins). On success the
    /// entry is appended to the iteration order and its handle returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<EntryRef> {
        let _g = self.reentrancy.lock();
        let hash = self.hasher.hash_one(&key);
        let bucket = self.bucket_of(hash);
        let dup = self.buckets[bucket]
            .iter()
            .any(|r| self.log.key(r.0).map(|k| *k == key).unwrap_or(false));
        if dup {
            return None;
        }
        let k = self.log.push_back(key, value, hash);
        self.buckets[bucket].push(EntryRef(k));
        // Growth runs no user code; release the scope before the rebuild.
        drop(_g);
        self.grow_if_needed();
        Some(EntryRef(k))
    }

    /// Double the bucket count and rebuild every chain while
    /// `bucket_count <= len * 2`.
    ///
    /// Re-indexes from each entry's stored hash, walking the log
    /// front-to-back; the log itself is untouched, so iteration order and
    /// outstanding handles are preserved. Eager and O(len).
    fn grow_if_needed(&mut self) {
        while self.buckets.len() <= self.log.len() * 2 {
            let new_count = self.buckets.len() * 2;
            for chain in &mut self.buckets {
                chain.clear();
            }
            self.buckets.resize_with(new_count, Vec::new);
            let mut cur = self.log.first();
            while let Some(k) = cur {
                let bucket = (self.log.hash_of(k) % new_count as u64) as usize;
                self.buckets[bucket].push(EntryRef(k));
                cur = self.log.next_of(k);
            }
        }
    }

    /// Locate the entry for `q` with a linear scan of its chain.
    /// `None` plays the role of the end position.
    pub fn find<Q>(&self, q: &Q) -> Option<EntryRef>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.lock();
        let hash = self.hasher.hash_one(q);
        self.buckets[self.bucket_of(hash)]
            .iter()
            .copied()
            .find(|r| self.log.key(r.0).map(|k| k.borrow() == q).unwrap_or(false))
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(q).is_some()
    }

    /// Read-only access that fails for absent keys; never inserts.
    pub fn at<Q>(&self, q: &Q) -> Result<&V, AccessError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let r = self.find(q).ok_or(AccessError::KeyNotFound)?;
        self.log.value(r.0).ok_or(AccessError::KeyNotFound)
    }

    /// Mutable access to the value for `key`, default-inserting on absence.
    ///
    /// The `operator[]`-style accessor: an absent key gets `(key, V::default())`
    /// appended first (which may grow the index), then the entry is re-located
    /// and its value returned.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let r = match self.find(&key) {
            Some(r) => r,
            None => match self.insert(key, V::default()) {
                Some(r) => r,
                None => unreachable!("fresh key rejected as duplicate"),
            },
        };
        match self.log.value_mut(r.0) {
            Some(v) => v,
            None => unreachable!("entry located above"),
        }
    }

    /// Remove the entry for `q`, returning its owned pair.
    ///
    /// No-op returning `None` when absent. Never shrinks the bucket index.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.lock();
        let hash = self.hasher.hash_one(q);
        let bucket = self.bucket_of(hash);
        let pos = self.buckets[bucket]
            .iter()
            .position(|r| self.log.key(r.0).map(|k| k.borrow() == q).unwrap_or(false))?;
        // Chain order carries no meaning, so swap_remove is fine.
        let r = self.buckets[bucket].swap_remove(pos);
        self.log.remove(r.0)
    }

    /// Remove every entry; the bucket count is unchanged.
    pub fn clear(&mut self) {
        let _g = self.reentrancy.lock();
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.log.clear();
    }

    /// Insertion-order iteration over `(&K, &V)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.log.iter(),
        }
    }

    /// Insertion-order iteration over `(&K, &mut V)`.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.log.iter_mut(),
        }
    }

    pub(crate) fn handle_key(&self, r: EntryRef) -> Option<&K> {
        let _g = self.reentrancy.lock();
        self.log.key(r.0)
    }

    pub(crate) fn handle_value(&self, r: EntryRef) -> Option<&V> {
        let _g = self.reentrancy.lock();
        self.log.value(r.0)
    }

    pub(crate) fn handle_value_mut(&mut self, r: EntryRef) -> Option<&mut V> {
        let _g = self.reentrancy.lock();
        self.log.value_mut(r.0)
    }
}

impl<K, V, S> Clone for OrderedHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut out = Self::with_hasher(self.hasher.clone());
        out.clone_from(self);
        out
    }

    /// The copy-assignment path: clear, take the source's hasher, size the
    /// bucket index to the source's current bucket count, then replay the
    /// source's entries in iteration order. The source's growth invariant
    /// (`bucket_count > len * 2`) means no doubling fires during the replay.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.hasher = source.hasher.clone();
        self.buckets.clear();
        self.buckets.resize_with(source.buckets.len(), Vec::new);
        for (k, v) in source.iter() {
            self.insert(k.clone(), v.clone());
        }
    }
}

impl<K, V, S> fmt::Debug for OrderedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.log.iter()).finish()
    }
}

/// Extends the map in source order; pairs whose key is already present are
/// silently skipped (unlike `HashMap::extend`, which overwrites).
impl<K, V, S> Extend<(K, V)> for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            let _ = self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_iter(pairs)
    }
}

pub struct Iter<'a, K, V> {
    inner: entry_log::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

pub struct IterMut<'a, K, V> {
    inner: entry_log::IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

/// Owning insertion-order iterator.
pub struct IntoIter<K, V> {
    log: EntryLog<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.log.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.log.len(), Some(self.log.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K, V, S> IntoIterator for &'a OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for OrderedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { log: self.log }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::Hasher;

    fn pairs(m: &OrderedHashMap<String, i32>) -> Vec<(String, i32)> {
        m.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    /// Invariant: duplicate insert is a silent no-op; the first value wins
    /// and len is unchanged.
    #[test]
    fn duplicate_insert_is_noop() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        let r = m.insert("dup".to_string(), 1).expect("fresh insert");
        assert!(m.insert("dup".to_string(), 2).is_none());
        assert_eq!(r.value(&m), Some(&1));
        assert_eq!(m.len(), 1);
    }

    /// Invariant: `find(k).is_some() == contains_key(k)`, and `find` on a
    /// fresh insert resolves to the inserted value.
    #[test]
    fn find_contains_parity() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        for (i, k) in ["a", "b", "c"].into_iter().enumerate() {
            m.insert(k.to_string(), i as i32);
        }
        for (i, k) in ["a", "b", "c"].into_iter().enumerate() {
            let r = m.find(k).expect("present");
            assert_eq!(r.value(&m), Some(&(i as i32)));
            assert!(m.contains_key(k));
        }
        for k in ["x", "y"] {
            assert!(m.find(k).is_none());
            assert!(!m.contains_key(k));
        }
    }

    /// Invariant: borrowed lookup works (store `String`, query with `&str`).
    #[test]
    fn borrowed_lookup_with_str() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        m.insert("hello".to_string(), 1);
        assert!(m.contains_key("hello"));
        assert!(!m.contains_key("world"));
        assert_eq!(m.at("hello"), Ok(&1));
    }

    /// Invariant: the bucket count starts at 20 and doubles exactly when an
    /// insertion makes `bucket_count <= len * 2`.
    #[test]
    fn doubling_fires_at_the_threshold() {
        let mut m: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        assert_eq!(m.bucket_count(), 20);
        for i in 0..9 {
            m.insert(i, i);
        }
        assert_eq!(m.bucket_count(), 20, "9 entries: 20 > 18, no growth");
        m.insert(9, 9);
        assert_eq!(m.bucket_count(), 40, "10 entries: 20 <= 20, doubled");
        for i in 10..20 {
            m.insert(i, i);
        }
        assert_eq!(m.bucket_count(), 80, "20 entries: 40 <= 40, doubled");
    }

    /// Invariant: growth rebuilds the index but not the log, so iteration
    /// order and previously issued handles survive.
    #[test]
    fn growth_preserves_order_and_handles() {
        let mut m: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        let early = m.insert(0, 100).expect("fresh insert");
        for i in 1..50 {
            m.insert(i, 100 + i);
        }
        assert!(m.bucket_count() >= 160, "at least two doublings happened");
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..50).collect::<Vec<_>>());
        assert_eq!(early.value(&m), Some(&100));
        assert_eq!(m.find(&0), Some(early));
    }

    /// Invariant: remove unlinks from chain and log; stale handles and
    /// lookups observe the absence; no shrink occurs.
    #[test]
    fn remove_then_lookup_misses() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        let r = m.insert("k".to_string(), 7).expect("fresh insert");
        let before = m.bucket_count();
        assert_eq!(m.remove("k"), Some(("k".to_string(), 7)));
        assert!(m.find("k").is_none());
        assert!(r.value(&m).is_none());
        assert_eq!(m.len(), 0);
        assert_eq!(m.bucket_count(), before);
        assert_eq!(m.remove("k"), None);
    }

    /// Invariant: clear empties the map but keeps the grown bucket count.
    #[test]
    fn clear_keeps_bucket_count() {
        let mut m: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        for i in 0..30 {
            m.insert(i, i);
        }
        let grown = m.bucket_count();
        assert!(grown > 20);
        m.clear();
        assert!(m.is_empty());
        assert_eq!(m.bucket_count(), grown);
        assert!(m.find(&3).is_none());
        m.insert(3, 3);
        assert_eq!(m.at(&3), Ok(&3));
    }

    /// Invariant: `at` fails with KeyNotFound for absent keys and never
    /// inserts.
    #[test]
    fn at_fails_without_inserting() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        assert_eq!(m.at("missing"), Err(AccessError::KeyNotFound));
        assert!(m.is_empty());
        m.insert("k".to_string(), 1);
        assert_eq!(m.at("k"), Ok(&1));
        assert_eq!(m.at("missing"), Err(AccessError::KeyNotFound));
        assert_eq!(m.len(), 1);
    }

    /// Invariant: get_or_insert_default default-inserts on absence and the
    /// returned reference writes through to subsequent lookups.
    #[test]
    fn get_or_insert_default_behaviors() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        assert_eq!(*m.get_or_insert_default("n".to_string()), 0);
        assert_eq!(m.len(), 1);
        *m.get_or_insert_default("n".to_string()) = 5;
        assert_eq!(m.at("n"), Ok(&5));
        // Present key: no new entry, existing value returned.
        assert_eq!(*m.get_or_insert_default("n".to_string()), 5);
        assert_eq!(m.len(), 1);
    }

    /// Invariant: iter_mut writes are visible to later reads; iteration
    /// stays in insertion order.
    #[test]
    fn iter_mut_writes_through() {
        let mut m: OrderedHashMap<String, i32> = OrderedHashMap::new();
        for (i, k) in ["a", "b", "c"].into_iter().enumerate() {
            m.insert(k.to_string(), i as i32);
        }
        for (_, v) in m.iter_mut() {
            *v += 10;
        }
        assert_eq!(
            pairs(&m),
            [
                ("a".to_string(), 10),
                ("b".to_string(), 11),
                ("c".to_string(), 12)
            ]
        );
    }

    /// Invariant: clone replays the source in iteration order and copies the
    /// source's bucket count; the copy is independent of the original.
    #[test]
    fn clone_is_independent_and_ordered() {
        let mut a: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        for i in 0..25 {
            a.insert(i, i * 2);
        }
        let b = a.clone();
        assert_eq!(b.bucket_count(), a.bucket_count());
        let order_a: Vec<i32> = a.iter().map(|(k, _)| *k).collect();
        let order_b: Vec<i32> = b.iter().map(|(k, _)| *k).collect();
        assert_eq!(order_a, order_b);

        a.remove(&3);
        a.insert(100, 0);
        assert!(b.contains_key(&3));
        assert!(!b.contains_key(&100));
        assert_eq!(b.len(), 25);
    }

    /// Invariant: clone_from resizes the destination's bucket index to the
    /// source's, up or down, and discards prior contents.
    #[test]
    fn clone_from_adopts_source_bucket_count() {
        let mut big: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        for i in 0..30 {
            big.insert(i, i);
        }
        let small: OrderedHashMap<i32, i32> =
            [(1, 10), (2, 20)].into_iter().collect();

        big.clone_from(&small);
        assert_eq!(big.bucket_count(), small.bucket_count());
        assert_eq!(
            big.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            [(1, 10), (2, 20)]
        );

        let mut fresh: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        let mut grown: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        for i in 0..30 {
            grown.insert(i, i);
        }
        fresh.clone_from(&grown);
        assert_eq!(fresh.bucket_count(), grown.bucket_count());
        assert_eq!(fresh.len(), 30);
    }

    /// Invariant: bulk construction inserts in source order with
    /// first-occurrence-wins on duplicates.
    #[test]
    fn from_iterator_first_wins() {
        let m: OrderedHashMap<i32, &str> =
            [(1, "a"), (2, "b"), (1, "z")].into_iter().collect();
        assert_eq!(m.len(), 2);
        assert_eq!(
            m.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            [(1, "a"), (2, "b")]
        );

        let m2 = OrderedHashMap::from([(1, "a"), (2, "b"), (1, "z")]);
        assert_eq!(m2.at(&1), Ok(&"a"));
    }

    /// Invariant: lookups and growth behave under total hash collisions;
    /// equality probing resolves the right entry.
    #[test]
    fn collision_handling_with_const_hasher() {
        #[derive(Clone, Default)]
        struct ConstBuildHasher;
        struct ConstHasher;
        impl BuildHasher for ConstBuildHasher {
            type Hasher = ConstHasher;
            fn build_hasher(&self) -> Self::Hasher {
                ConstHasher
            }
        }
        impl Hasher for ConstHasher {
            fn write(&mut self, _bytes: &[u8]) {}
            fn finish(&self) -> u64 {
                0
            }
        }

        let mut m: OrderedHashMap<i32, i32, ConstBuildHasher> =
            OrderedHashMap::with_hasher(ConstBuildHasher);
        for i in 0..15 {
            m.insert(i, i);
        }
        assert!(m.bucket_count() > 20, "growth still fires on one chain");
        for i in 0..15 {
            assert_eq!(m.at(&i), Ok(&i));
        }
        assert!(m.find(&99).is_none());
        assert_eq!(m.remove(&7), Some((7, 7)));
        assert!(m.find(&7).is_none());
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..15).filter(|&i| i != 7).collect::<Vec<_>>());
    }

    /// Invariant: hash_function returns a copy of the supplied hasher.
    #[test]
    fn hash_function_returns_hasher() {
        let state = RandomState::new();
        let m: OrderedHashMap<String, i32, RandomState> =
            OrderedHashMap::with_hasher(state.clone());
        let h = m.hash_function();
        assert_eq!(h.hash_one("probe"), state.hash_one("probe"));
    }

    /// Invariant: the owning iterator drains in insertion order.
    #[test]
    fn into_iter_drains_in_order() {
        let mut m: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        for i in 0..5 {
            m.insert(i, i * 10);
        }
        m.remove(&2);
        let drained: Vec<(i32, i32)> = m.into_iter().collect();
        assert_eq!(drained, [(0, 0), (1, 10), (3, 30), (4, 40)]);
    }
}
