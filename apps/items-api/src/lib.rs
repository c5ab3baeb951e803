//! Items HTTP API
//!
//! ## Architecture
//!
//! ```text
//! HTTP client
//!   ↓ (CORS, tracing, security headers, compression)
//! axum router (api/)
//!   ↓
//! ItemService (domain_items)
//!   ↓
//! InMemoryItemRepository (process-lifetime store)
//! ```
//!
//! ## Routes
//!
//! - `GET /` greeting
//! - `GET /health` liveness
//! - `/api/items` CRUD
//! - `/api-docs/openapi.json`, `/redoc`, `/rapidoc`, `/scalar` docs

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

pub use config::Config;
pub use state::AppState;

/// Builds the complete application router for `state`.
///
/// # Errors
/// Fails if the CORS configuration cannot be turned into a layer.
pub fn build_router(state: &AppState) -> io::Result<Router> {
    let root = api::root::router().merge(health_router(state.config.app));

    create_router::<openapi::ApiDoc>(api::routes(state), root, &state.config.cors)
}
