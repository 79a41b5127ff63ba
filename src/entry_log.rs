//! EntryLog: insertion-ordered owner of all map entries.
//!
//! Nodes live in a `SlotMap` arena and are threaded into a doubly-linked
//! list in insertion order. The arena hands out stable generational keys,
//! so a key never resolves to a different entry after its own entry is
//! removed, and keys stay valid across any rebuild of the bucket index
//! (the index never touches the arena).
//!
//! Each node also records the `u64` hash computed for its key at insert
//! time. The map layer indexes and rebuilds chains from this stored hash,
//! so `K: Hash` runs exactly once per entry.

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Arena key for a log node.
    pub(crate) struct LogKey;
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    hash: u64,
    prev: Option<LogKey>,
    next: Option<LogKey>,
}

/// Doubly-linked insertion-ordered log over a slot arena.
///
/// Link invariant: following `head`/`next` visits every live node exactly
/// once, in insertion order, ending at `tail`; `prev` mirrors `next`.
#[derive(Debug)]
pub(crate) struct EntryLog<K, V> {
    slots: SlotMap<LogKey, Node<K, V>>,
    head: Option<LogKey>,
    tail: Option<LogKey>,
}

impl<K, V> EntryLog<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn first(&self) -> Option<LogKey> {
        self.head
    }

    pub(crate) fn next_of(&self, k: LogKey) -> Option<LogKey> {
        self.slots[k].next
    }

    /// Append a node at the tail and return its arena key.
    pub(crate) fn push_back(&mut self, key: K, value: V, hash: u64) -> LogKey {
        let k = self.slots.insert(Node {
            key,
            value,
            hash,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.slots[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
        k
    }

    /// Unlink and take the node at `k`. Returns `None` for stale keys.
    pub(crate) fn remove(&mut self, k: LogKey) -> Option<(K, V)> {
        let node = self.slots.remove(k)?;
        match node.prev {
            Some(p) => self.slots[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.slots[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some((node.key, node.value))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    pub(crate) fn key(&self, k: LogKey) -> Option<&K> {
        self.slots.get(k).map(|n| &n.key)
    }

    pub(crate) fn value(&self, k: LogKey) -> Option<&V> {
        self.slots.get(k).map(|n| &n.value)
    }

    pub(crate) fn value_mut(&mut self, k: LogKey) -> Option<&mut V> {
        self.slots.get_mut(k).map(|n| &mut n.value)
    }

    pub(crate) fn hash_of(&self, k: LogKey) -> u64 {
        self.slots[k].hash
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            log: self,
            cur: self.head,
            remaining: self.len(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            cur: self.head,
            remaining: self.len(),
            slots: &mut self.slots as *mut SlotMap<LogKey, Node<K, V>>,
            _marker: core::marker::PhantomData,
        }
    }

    /// Unlink and take the head node, if any.
    pub(crate) fn pop_front(&mut self) -> Option<(K, V)> {
        let k = self.head?;
        self.remove(k)
    }
}

/// Front-to-back shared iterator over `(key, value)` pairs.
pub(crate) struct Iter<'a, K, V> {
    log: &'a EntryLog<K, V>,
    cur: Option<LogKey>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let node = &self.log.slots[k];
        self.cur = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Front-to-back iterator yielding mutable value references.
///
/// The only unsafe in the crate lives here. Soundness rests on the link
/// invariant: the `next` chain is acyclic and visits each arena slot at
/// most once, so no two yielded references alias. The phantom borrow
/// keeps the log mutably borrowed for the iterator's lifetime.
pub(crate) struct IterMut<'a, K, V> {
    slots: *mut SlotMap<LogKey, Node<K, V>>,
    cur: Option<LogKey>,
    remaining: usize,
    _marker: core::marker::PhantomData<&'a mut EntryLog<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        // SAFETY: `slots` outlives 'a via the phantom borrow, and the link
        // chain yields each key once, so this &mut does not alias any
        // reference produced by a previous call.
        let node = unsafe { (*self.slots).get_mut(k)? };
        self.cur = node.next;
        self.remaining -= 1;
        Some((&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
