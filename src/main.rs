// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Beancounter Office API Server
//!
//! Serves the back-office JSON API (and optionally the web UI assets) on top
//! of the Beancounter platform REST API.

use beancounter_office::{config::Config, services::BeancounterClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Beancounter Office API");

    // Initialize Beancounter client
    let client = BeancounterClient::new(&config.bc_api_url, config.upstream_timeout)?;
    tracing::info!(api_root = client.api_root(), "Beancounter API client initialized");

    if let Some(dir) = &config.assets_dir {
        tracing::info!(path = %dir.display(), "Serving static assets");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        client: Arc::new(client),
    });

    // Build router
    let app = beancounter_office::routes::create_router(state);

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,beancounter_office=debug"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
