//! # catpointd: catpoint daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize structured logging
//! - Seed the in-memory repository with the configured arming status and sensors
//! - Construct the security service, injecting the repository and verdict provider
//! - Register status listeners (log output, SSE event bus)
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;
mod listener;

use tracing_subscriber::EnvFilter;

use catpoint_adapter_http_axum::state::AppState;
use catpoint_adapter_storage_memory::InMemorySecurityRepository;
use catpoint_app::event_bus::InProcessEventBus;
use catpoint_app::services::security_service::SecurityService;

use crate::config::Config;
use crate::listener::TracingListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Repository
    let repository = InMemorySecurityRepository::new()
        .with_arming_status(config.security.arming_status)
        .with_sensors(config.initial_sensors()?);

    // Services
    let mut security = SecurityService::new(repository, config.vision.build());
    security.add_status_listener(TracingListener);

    // Event bus
    let event_bus = InProcessEventBus::new(256);

    // HTTP
    let state = AppState::new(security, event_bus);
    let app = catpoint_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        arming_status = %config.security.arming_status,
        sensors = config.sensors.len(),
        "catpointd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("catpointd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
