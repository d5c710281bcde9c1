use resource_registry::api::{self, AppState};
use resource_registry::config::{AppConfig, FromEnv};
use resource_registry::lifecycle::{setup_tracing, RegistrySystem};
use resource_registry::model::employee;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting resource registry");

    let system = RegistrySystem::new(&config.registry);
    let state = AppState::new(
        system.product_client.clone(),
        system.user_client.clone(),
        employee::directory(),
    );

    let listener = tokio::net::TcpListener::bind(config.server.address())
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.server.address(), e))?;
    info!("Server listening on {}", config.server.address());

    // `serve` owns the router; it is dropped, with its client clones, once this returns.
    let served = axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!("Server encountered an error: {:?}", e);
    }

    system.shutdown().await?;
    served.map_err(|e| e.to_string())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
