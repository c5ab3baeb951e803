use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemId, UpdateItem};

/// Repository trait for Item storage
///
/// Implementations own id assignment and keep items in insertion order.
/// Input validation happens in the service before any of these are called.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// Append a new item under the next unused id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Replace name and description in place; `NotFound` if absent
    async fn update(&self, id: ItemId, input: UpdateItem) -> ItemResult<Item>;

    /// Remove an item, returning it if it existed
    async fn delete(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// Number of stored items
    async fn count(&self) -> ItemResult<usize>;
}
