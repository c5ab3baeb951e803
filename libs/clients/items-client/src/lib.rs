//! Typed HTTP client for the Items API.
//!
//! Request and response bodies are the same types the server uses
//! (`domain_items` models, `axum_helpers` health and error envelopes), so a
//! shape change on one side fails to compile on the other.
//!
//! ```ignore
//! use domain_items::CreateItem;
//! use items_client::ItemsClient;
//!
//! let client = ItemsClient::from_env();
//! let item = client.create_item(&CreateItem::new("Lamp", "desk lamp")).await?;
//! client.delete_item(item.id).await?;
//! ```

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, ITEMS_API_URL_ENV, ItemsClient};
pub use error::{ClientError, ClientResult};

// Re-exported so consumers don't need a direct dependency on the domain crate.
pub use domain_items::{CreateItem, DeleteItemResponse, Item, ItemId, MessageResponse, UpdateItem};
