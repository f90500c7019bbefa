//! Airspace Dashboard Server - REST backend for the synthetic traffic map

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airspace_server::api;
use airspace_server::config::Config;
use airspace_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("airspace_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting Airspace Dashboard Server...");

    let config = Config::from_env();
    let port = config.server_port;
    tracing::info!(
        seed = config.seed,
        flights = config.flight_count,
        "Synthetic traffic configured"
    );
    let state = Arc::new(AppState::new(config));

    // Build the app
    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
