//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache's read/write contract over arbitrary keys and values.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::TtlCache;

// == Test Configuration ==
/// Long enough that no sweep can run during a test case
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_/:.-]{0,64}"
}

/// Generates arbitrary byte values, including empty ones
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// A cache operation used to build random histories
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Adding a pair and reading it back before any sweep returns the same bytes.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        tokio_test::block_on(async {
            let cache = TtlCache::new(TEST_TTL);

            cache.add(key.clone(), value.clone());

            prop_assert_eq!(cache.get(&key), Some(value));
            Ok(())
        })?;
    }

    // A key that was never added is a miss.
    #[test]
    fn prop_miss_on_absent_key(
        present in key_strategy(),
        absent in key_strategy(),
        value in value_strategy()
    ) {
        prop_assume!(present != absent);
        tokio_test::block_on(async {
            let cache = TtlCache::new(TEST_TTL);

            cache.add(present, value);

            prop_assert_eq!(cache.get(&absent), None);
            Ok(())
        })?;
    }

    // The later of two writes to the same key wins.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        tokio_test::block_on(async {
            let cache = TtlCache::new(TEST_TTL);

            cache.add(key.clone(), value1);
            cache.add(key.clone(), value2.clone());

            prop_assert_eq!(cache.get(&key), Some(value2));
            prop_assert_eq!(cache.len(), 1);
            Ok(())
        })?;
    }

    // Before any sweep, the cache behaves exactly like a HashMap with last-write-wins.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        tokio_test::block_on(async {
            let cache = TtlCache::new(TEST_TTL);
            let mut model: HashMap<String, Vec<u8>> = HashMap::new();

            for op in ops {
                match op {
                    CacheOp::Add { key, value } => {
                        cache.add(key.clone(), value.clone());
                        model.insert(key, value);
                    }
                    CacheOp::Get { key } => {
                        prop_assert_eq!(cache.get(&key), model.get(&key).cloned());
                    }
                }
            }

            prop_assert_eq!(cache.len(), model.len());
            Ok(())
        })?;
    }
}
