#![cfg(test)]

// Property tests for OrderedHashMap kept inside the crate so they can reach
// internals like bucket_count without feature gates.

use crate::ordered_hash_map::{EntryRef, OrderedHashMap};
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hasher};

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Find(usize),
    Contains(String),
    GetOrDefault(usize, i32),
    At(usize),
    Iterate,
    Clear,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            8 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            4 => idx.clone().prop_map(OpI::Remove),
            4 => idx.clone().prop_map(OpI::Find),
            2 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::GetOrDefault(i, d)),
            2 => idx.clone().prop_map(OpI::At),
            3 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Ordered reference model: value map plus the live keys in insertion order.
struct Model {
    values: HashMap<Key, i32>,
    order: Vec<Key>,
}

impl Model {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert_first_wins(&mut self, k: Key, v: i32) -> bool {
        if self.values.contains_key(&k) {
            return false;
        }
        self.values.insert(k.clone(), v);
        self.order.push(k);
        true
    }

    fn remove(&mut self, k: &Key) -> Option<i32> {
        let v = self.values.remove(k)?;
        self.order.retain(|x| x != k);
        Some(v)
    }

    fn clear(&mut self) {
        self.values.clear();
        self.order.clear();
    }

    fn pairs(&self) -> Vec<(Key, i32)> {
        self.order.iter().map(|k| (k.clone(), self.values[k])).collect()
    }
}

fn run_scenario<S>(mut sut: OrderedHashMap<Key, i32, S>, pool: Vec<String>, ops: Vec<OpI>)
where
    S: BuildHasher,
{
    let mut model = Model::new();
    let mut live: HashMap<Key, EntryRef> = HashMap::new();
    let mut stale: Vec<EntryRef> = Vec::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = key_from(&pool, i);
                let inserted = sut.insert(k.clone(), v);
                let fresh = model.insert_first_wins(k.clone(), v);
                assert_eq!(
                    inserted.is_some(),
                    fresh,
                    "insert returns a handle iff the key was absent"
                );
                if let Some(r) = inserted {
                    assert_eq!(r.value(&sut), Some(&v));
                    let prev = live.insert(k, r);
                    assert!(prev.is_none());
                }
            }
            OpI::Remove(i) => {
                let k = key_from(&pool, i);
                let got = sut.remove(k.0.as_str());
                let expect = model.remove(&k);
                assert_eq!(got.map(|(_, v)| v), expect);
                if expect.is_some() {
                    stale.push(live.remove(&k).expect("tracked live handle"));
                } else {
                    assert!(sut.find(&k).is_none());
                }
            }
            OpI::Find(i) => {
                let k = key_from(&pool, i);
                let found = sut.find(k.0.as_str());
                assert_eq!(found.is_some(), model.values.contains_key(&k));
                if let Some(r) = found {
                    assert_eq!(live.get(&k), Some(&r), "handle stable for live entry");
                    assert_eq!(r.value(&sut), model.values.get(&k));
                }
            }
            OpI::Contains(s) => {
                let has_model = model.values.keys().any(|k| k.0 == s);
                assert_eq!(sut.contains_key(s.as_str()), has_model);
            }
            OpI::GetOrDefault(i, d) => {
                let k = key_from(&pool, i);
                let was_absent = !model.values.contains_key(&k);
                let v = sut.get_or_insert_default(k.clone());
                if was_absent {
                    assert_eq!(*v, 0, "absent key default-inserts");
                    model.insert_first_wins(k.clone(), 0);
                    // A fresh entry from this path has no tracked handle yet.
                    let r = sut.find(&k).expect("just inserted");
                    live.insert(k.clone(), r);
                    // Reborrow after the lookup to apply the mutation.
                    *sut.get_or_insert_default(k.clone()) = d;
                } else {
                    *v = d;
                }
                *model.values.get_mut(&k).expect("present in model") = d;
                assert_eq!(sut.at(k.0.as_str()), Ok(&d));
            }
            OpI::At(i) => {
                let k = key_from(&pool, i);
                match model.values.get(&k) {
                    Some(v) => assert_eq!(sut.at(k.0.as_str()), Ok(v)),
                    None => assert!(sut.at(k.0.as_str()).is_err()),
                }
            }
            OpI::Iterate => {
                let got: Vec<(Key, i32)> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                assert_eq!(got, model.pairs(), "iteration is insertion order");
            }
            OpI::Clear => {
                let buckets = sut.bucket_count();
                sut.clear();
                model.clear();
                stale.extend(live.drain().map(|(_, r)| r));
                assert_eq!(sut.bucket_count(), buckets, "clear keeps capacity");
            }
        }

        // Post-conditions after each op.
        for &r in &stale {
            assert!(r.value(&sut).is_none(), "stale handle must not resolve");
        }
        assert_eq!(sut.len(), model.values.len());
        assert_eq!(sut.is_empty(), model.values.is_empty());
        assert!(
            sut.bucket_count() > sut.len() * 2,
            "growth invariant holds after every op"
        );
    }

    // Final full-order check plus findability of every iterated key.
    let final_pairs: Vec<(Key, i32)> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(final_pairs, model.pairs());
    for (k, _) in &final_pairs {
        assert!(sut.find(k.0.as_str()).is_some());
    }
}

// Property: state-machine equivalence against a HashMap-plus-order-list
// model. Invariants exercised across random operation sequences:
// - first-wins inserts; duplicate inserts change nothing;
// - iteration order equals insertion order of the live keys;
// - find/contains/at parity with the model; stale handles never resolve;
// - clear keeps the bucket count; the doubling invariant holds throughout.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(OrderedHashMap::new(), pool, ops);
    }
}

// Collision variant using a constant hasher: every key lands in one chain,
// stressing equality probing, chain removal, and growth of a single chain.
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

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(OrderedHashMap::with_hasher(ConstBuildHasher), pool, ops);
    }
}

// Property: cloning at an arbitrary point yields an equal, independent map
// with the source's bucket count; mutating the original afterwards does not
// leak into the copy.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_clone_snapshot(keys in proptest::collection::vec("[a-z]{0,4}", 0..40)) {
        let mut a: OrderedHashMap<String, usize> = OrderedHashMap::new();
        for (i, k) in keys.iter().enumerate() {
            a.insert(k.clone(), i);
        }
        let b = a.clone();
        prop_assert_eq!(b.bucket_count(), a.bucket_count());
        let snap_a: Vec<(String, usize)> = a.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let snap_b: Vec<(String, usize)> = b.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(&snap_a, &snap_b);

        // Mutate the original; the copy must not move.
        for k in keys.iter().take(keys.len() / 2) {
            a.remove(k.as_str());
        }
        a.insert("zzzzzz".to_string(), 0);
        let after_b: Vec<(String, usize)> = b.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(after_b, snap_b);
    }
}
