use crate::{ChainedHashMap, DEFAULT_LOAD_FACTOR_THRESHOLD};

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

fn validate_map<K: Eq + Hash + std::fmt::Debug, V>(m: &ChainedHashMap<K, V>) {
    let lengths = m.chain_lengths();
    assert_eq!(lengths.len(), m.capacity(), "one chain per bucket");
    assert_eq!(lengths.iter().sum::<usize>(), m.len(), "len must match total chain length");
    assert_eq!(m.key_set().len(), m.len(), "key set must reach every entry");
    assert!(
        m.load_factor() <= m.load_factor_threshold(),
        "load factor {} above threshold {}",
        m.load_factor(),
        m.load_factor_threshold()
    );

    let distinct: HashSet<&K> = m.keys().collect();
    assert_eq!(distinct.len(), m.len(), "keys must be unique");

    for key in m.keys() {
        assert!(m.contains_key(key), "{key:?} is enumerated but not found");
    }
}

#[derive(Clone, Debug)]
enum Op {
    Put(String, u32),
    Remove(String),
    Get(String),
    Clear,
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet keeps collisions and overwrites frequent
    "[a-f]{0,3}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        24 => key.prop_map(Op::Get),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_std(ops in ops_strategy()) {
        let mut t: ChainedHashMap<String, u32> = ChainedHashMap::new();
        let mut m: HashMap<String, u32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(key, value) => {
                    let old_t = t.put(key.clone(), value);
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Remove(key) => {
                    let old_t = t.remove(key.as_str());
                    let old_m = m.remove(key.as_str());
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(key.as_str()), m.get(key.as_str()));
                    prop_assert_eq!(t.contains_key(key.as_str()), m.contains_key(key.as_str()));
                }
                Op::Clear => {
                    t.clear();
                    m.clear();
                }
            }

            prop_assert_eq!(t.len(), m.len());
            prop_assert_eq!(t.is_empty(), m.is_empty());
        }

        validate_map(&t);
        let mut got: Vec<(String, u32)> = t.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let mut expected: Vec<(String, u32)> = m.into_iter().collect();
        got.sort();
        expected.sort();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_growth_keeps_every_key(keys in prop::collection::hash_set(any::<u64>(), 0..400)) {
        let mut t = ChainedHashMap::new();
        let mut expected_capacity = t.capacity();

        for (value, key) in keys.iter().enumerate() {
            t.put(*key, value);

            #[allow(clippy::cast_precision_loss)]
            let over = t.len() as f64 / expected_capacity as f64 > DEFAULT_LOAD_FACTOR_THRESHOLD;
            if over {
                expected_capacity *= 2;
            }
            prop_assert_eq!(t.capacity(), expected_capacity);
        }

        validate_map(&t);
        for (value, key) in keys.iter().enumerate() {
            prop_assert_eq!(t.get(key), Some(&value));
        }
    }

    #[test]
    fn prop_remove_is_exact(keys in prop::collection::vec(key_strategy(), 1..100), probe in key_strategy()) {
        let mut t: ChainedHashMap<String, usize> = ChainedHashMap::new();
        for (i, key) in keys.into_iter().enumerate() {
            t.put(key, i);
        }

        let before = t.len();
        let capacity = t.capacity();
        let present = t.contains_key(probe.as_str());
        let removed = t.remove(probe.as_str());

        prop_assert_eq!(removed.is_some(), present);
        prop_assert_eq!(t.len(), if present { before - 1 } else { before });
        prop_assert_eq!(t.get(probe.as_str()), None);
        prop_assert_eq!(t.capacity(), capacity);
        validate_map(&t);
    }
}

#[test]
fn insertion_order_within_each_chain() {
    // One bucket: the key set is exactly insertion order
    let mut t = ChainedHashMap::with_capacity(1);
    t.set_load_factor_threshold(16.0);
    for key in ["delta", "alpha", "charlie", "bravo"] {
        t.put(key, key.len());
    }
    assert_eq!(t.capacity(), 1);
    assert_eq!(t.key_set(), vec![&"delta", &"alpha", &"charlie", &"bravo"]);

    t.remove("alpha");
    t.put("alpha", 0);
    assert_eq!(t.key_set(), vec![&"delta", &"charlie", &"bravo", &"alpha"]);
    validate_map(&t);
}

#[test]
fn rehash_preserves_relative_order_within_chains() {
    let mut t = ChainedHashMap::with_capacity(1);
    let keys: Vec<u32> = (0..64).collect();
    for key in &keys {
        t.put(*key, ());
    }

    // Entries sharing a chain after growth were inserted in ascending order
    let mut previous: Option<(usize, u32)> = None;
    let mut offset = 0;
    for (bucket, length) in t.chain_lengths().into_iter().enumerate() {
        for key in t.key_set().into_iter().skip(offset).take(length) {
            if let Some((prev_bucket, prev_key)) = previous {
                if prev_bucket == bucket {
                    assert!(prev_key < *key, "chain {bucket} out of order");
                }
            }
            previous = Some((bucket, *key));
        }
        offset += length;
    }
    validate_map(&t);
}
