// src/main.rs

use clap::Parser;
use tokio::net::TcpListener;

use kitchenhub::application::{create_router, AppState, CliArgs, ServerConfig};
use kitchenhub::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let config = ServerConfig::from_args(CliArgs::parse())?;

    // 2. LOGGING
    init_logging(&config.log_filter)?;

    // 3. STORES (seeded once, live for the whole process)
    let state = if config.seed {
        AppState::seeded()
    } else {
        AppState::empty()
    };
    let recipe_count = state.recipes.read().await.len();
    let item_count = state.inventory.read().await.len();
    log::info!(
        "Stores ready: {} recipe(s), {} inventory item(s)",
        recipe_count,
        item_count
    );

    // 4. HTTP BOOTSTRAP
    let app = create_router(state);
    let listener = TcpListener::bind(config.bind_address).await?;
    log::info!("KitchenHub listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("KitchenHub stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
