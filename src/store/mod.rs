//! Item Store Module
//!
//! Authoritative item storage. Handlers depend on the [`ItemStore`] trait;
//! [`MemoryItemStore`] is the bundled backend.

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Item, ItemId, NewItem};

pub use memory::MemoryItemStore;

// == Item Store ==
/// Persistence contract for items. Each call is a single write or read.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists a new item and returns it with its assigned id.
    async fn insert(&self, item: NewItem) -> Result<Item>;

    /// Looks up an item by id.
    async fn get(&self, id: ItemId) -> Result<Option<Item>>;

    /// Replaces a stored item. Fails with `NotFound` if it no longer exists.
    async fn update(&self, item: Item) -> Result<Item>;

    /// Removes an item. Returns whether it existed.
    async fn delete(&self, id: ItemId) -> Result<bool>;
}
