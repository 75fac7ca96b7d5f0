//! In-memory item store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};
use crate::models::{Item, ItemId, NewItem};
use crate::store::ItemStore;

#[derive(Debug)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: u64,
}

/// BTreeMap-backed store with sequential ids.
///
/// Ids start at 1 and are not reused after a delete.
#[derive(Debug)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, item: NewItem) -> Result<Item> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let id = ItemId(inner.next_id);
        inner.next_id += 1;

        let item = item.into_item(id);
        inner.items.insert(id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn update(&self, item: Item) -> Result<Item> {
        let mut inner = self.inner.write().await;
        match inner.items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(item)
            }
            None => Err(ApiError::NotFound(item.id.to_string())),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<bool> {
        Ok(self.inner.write().await.items.remove(&id).is_some())
    }
}
