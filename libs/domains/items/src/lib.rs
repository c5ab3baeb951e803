//! Items Domain
//!
//! Lifecycle of the `Item` resource held in an in-process store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage trait + in-memory implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! // Store with the two sample items, ids 1 and 2
//! let repository = InMemoryItemRepository::seeded();
//! let service = ItemService::new(repository);
//!
//! // Axum router, nested under /api/items by the app
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ITEM_NOT_FOUND_MESSAGE, ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{
    CreateItem, DeleteItemResponse, ITEM_DELETED_MESSAGE, Item, ItemId, MessageResponse,
    UpdateItem, parse_item_id,
};
pub use repository::ItemRepository;
pub use service::ItemService;
