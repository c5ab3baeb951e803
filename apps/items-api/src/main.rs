use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use items_api::{AppState, Config, build_router};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let state = AppState::new(config);
    info!(
        seeded = state.config.seed_items,
        items = state.items.count_items().await?,
        "Item store initialized"
    );

    let app = build_router(&state)?;

    info!("Starting Items API with graceful shutdown (30s timeout)");

    let items = state.items.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            // The store is not persisted; whatever it holds now is dropped.
            match items.count_items().await {
                Ok(count) => info!(count, "Discarding in-memory items"),
                Err(e) => tracing::warn!("Could not count items at shutdown: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
