mod domain;
mod clients;

mod app_system;
mod routes;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod file_store;
mod product_actor;
mod cart_actor;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, Config, ShopSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(?config, "Starting catalog and cart service");

    // Start both collection actors over the data directory
    let system = ShopSystem::new(&config);
    let app = routes::router(system.state());

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .map_err(|e| format!("Could not bind {}: {}", config.addr(), e))?;
    info!(addr = %config.addr(), "Listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server failed");
    }

    // Router is gone, so the actors can drain
    system.shutdown().await?;

    info!("Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
