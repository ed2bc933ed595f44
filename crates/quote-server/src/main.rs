//! Quote server - HTTP surface for air-ambulance quotes

use anyhow::{Context, Result};
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quote_server::api;
use quote_server::config::Config;
use quote_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quote_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting quote server...");

    let config = Config::from_env();
    let port = config.server_port;
    let state = AppState::from_config(&config).context("failed to load gazetteer or fleet")?;
    tracing::info!(
        "Loaded {} cities and {} aircraft",
        state.gazetteer().len(),
        state.fleet_len()
    );
    let state = Arc::new(state);

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
