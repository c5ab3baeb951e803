//! Application state management.

use domain_items::{InMemoryItemRepository, ItemService};

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap: the item service shares one store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Item lifecycle operations over the process-lifetime store
    pub items: ItemService<InMemoryItemRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_items {
            InMemoryItemRepository::seeded()
        } else {
            InMemoryItemRepository::new()
        };

        Self {
            config,
            items: ItemService::new(repository),
        }
    }
}
