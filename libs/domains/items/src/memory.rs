//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemId, UpdateItem, seed_items};
use crate::repository::ItemRepository;

const FIRST_ID: ItemId = 1;

/// Items plus the id counter, guarded together so id assignment and the
/// push that follows it happen under one write lock.
#[derive(Debug)]
struct StoreState {
    items: Vec<Item>,
    next_id: ItemId,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn insert(&mut self, input: CreateItem) -> ItemResult<Item> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| ItemError::Internal("item id space exhausted".to_string()))?;

        let item = Item::new(id, input);
        self.items.push(item.clone());
        Ok(item)
    }
}

/// Process-lifetime item store. Contents are lost on restart.
///
/// Cloning shares the same underlying store.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryItemRepository {
    /// Empty store; the first created item gets id 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::empty())),
        }
    }

    /// Store holding the two sample items (ids 1 and 2); the next id is 3.
    pub fn seeded() -> Self {
        let mut state = StoreState::empty();
        for input in seed_items() {
            // A fresh counter cannot overflow on two inserts.
            if let Err(e) = state.insert(input) {
                tracing::error!("Failed to seed item store: {}", e);
            }
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let state = self.state.read().await;
        Ok(state.items.clone())
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut state = self.state.write().await;
        let item = state.insert(input)?;

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ItemId, input: UpdateItem) -> ItemResult<Item> {
        let mut state = self.state.write().await;
        let index = state.position(id).ok_or_else(|| ItemError::not_found(id))?;

        let item = &mut state.items[index];
        item.apply_update(input);
        let updated = item.clone();

        tracing::info!(item_id = id, "Updated item");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let mut state = self.state.write().await;
        let Some(index) = state.position(id) else {
            return Ok(None);
        };

        // Vec::remove shifts the tail, keeping the remaining order intact.
        let removed = state.items.remove(index);
        tracing::info!(item_id = id, "Deleted item");
        Ok(Some(removed))
    }

    async fn count(&self) -> ItemResult<usize> {
        Ok(self.state.read().await.items.len())
    }
}
