//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemId, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing the lifecycle operations
///
/// Validates input before any mutation and turns missing ids into
/// [`ItemError::NotFound`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all items in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ItemError::not_found(id))
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Replace an item's name and description
    ///
    /// A missing id is reported before the input is validated.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: ItemId, input: UpdateItem) -> ItemResult<Item> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ItemError::not_found(id));
        }

        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Delete an item, returning what was removed
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| ItemError::not_found(id))
    }

    /// Number of stored items
    pub async fn count_items(&self) -> ItemResult<usize> {
        self.repository.count().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
