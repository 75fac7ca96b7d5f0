//! Property-Based Tests for the Cache Module
//!
//! Exercises the get/set/delete contract of [`MemoryCache`] over random
//! operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{cache_key, ItemCache, MemoryCache};
use crate::models::{Item, ItemId};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
fn item_strategy() -> impl Strategy<Value = Item> {
    (1u64..32, "[a-zA-Z0-9 ]{1,32}", "[a-zA-Z0-9 ]{0,64}", 0i64..10_000).prop_map(
        |(id, name, description, quantity)| Item {
            id: ItemId(id),
            name,
            description,
            quantity,
        },
    )
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set(Item),
    Get(u64),
    Delete(u64),
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        item_strategy().prop_map(CacheOp::Set),
        (1u64..32).prop_map(CacheOp::Get),
        (1u64..32).prop_map(CacheOp::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The cache behaves like a plain map while no entry has expired, and its
    // counters agree with what the caller observed.
    #[test]
    fn prop_cache_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        tokio_test::block_on(async {
            let cache = MemoryCache::new();
            let mut model: HashMap<u64, Item> = HashMap::new();
            let mut hits = 0u64;
            let mut misses = 0u64;

            for op in ops {
                match op {
                    CacheOp::Set(item) => {
                        cache.set(&cache_key(item.id), item.clone(), TEST_TTL).await;
                        model.insert(item.id.0, item);
                    }
                    CacheOp::Get(id) => {
                        let got = cache.get(&cache_key(ItemId(id))).await;
                        assert_eq!(got.as_ref(), model.get(&id));
                        if got.is_some() { hits += 1 } else { misses += 1 }
                    }
                    CacheOp::Delete(id) => {
                        cache.delete(&cache_key(ItemId(id))).await;
                        model.remove(&id);
                    }
                }
            }

            let stats = cache.stats().await;
            assert_eq!(stats.hits, hits);
            assert_eq!(stats.misses, misses);
            assert_eq!(stats.total_entries, model.len());
        });
    }

    // After a delete, the next get misses no matter what was stored.
    #[test]
    fn prop_delete_invalidates(item in item_strategy()) {
        tokio_test::block_on(async {
            let cache = MemoryCache::new();
            let key = cache_key(item.id);

            cache.set(&key, item, TEST_TTL).await;
            assert!(cache.get(&key).await.is_some());

            cache.delete(&key).await;
            assert!(cache.get(&key).await.is_none());
        });
    }

    // A second set under the same key replaces the first.
    #[test]
    fn prop_overwrite_semantics(first in item_strategy(), quantity in 0i64..10_000) {
        tokio_test::block_on(async {
            let cache = MemoryCache::new();
            let key = cache_key(first.id);
            let second = Item { quantity, ..first.clone() };

            cache.set(&key, first, TEST_TTL).await;
            cache.set(&key, second.clone(), TEST_TTL).await;

            assert_eq!(cache.get(&key).await, Some(second));
            assert_eq!(cache.len().await, 1);
        });
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Expired entries are never served.
    #[test]
    fn prop_expired_entries_not_served(item in item_strategy()) {
        tokio_test::block_on(async {
            let cache = MemoryCache::new();
            let key = cache_key(item.id);

            cache.set(&key, item, Duration::from_millis(20)).await;
            std::thread::sleep(Duration::from_millis(40));

            assert!(cache.get(&key).await.is_none());
        });
    }
}
