// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Baypolicy-Map Server
//!
//! Serves the anti-displacement policy map and its JSON API. The policy
//! dataset is fetched in the background; the map shows a loading state until
//! it arrives.

use anyhow::Context;
use baypolicy_map::{config::Config, services::loader, services::DataLoader, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(port = config.port, "Starting Baypolicy-Map");

    let loader = DataLoader::from_config(&config);
    tracing::info!(source = %loader.source(), "Policy dataset source");

    // Build shared state
    let state = Arc::new(AppState::new(config.clone()));

    // Fetch the dataset once; the server starts answering immediately
    loader::spawn_initial_load(state.clone(), loader);

    // Build router
    let app = baypolicy_map::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("baypolicy_map=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
