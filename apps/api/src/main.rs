mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::classifier::{GapClassifier, REFERENCE_SET};
use crate::analysis::extractor::KNOWN_SKILLS;
use crate::analysis::recommendations::RESOURCE_TABLE;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skill-gap API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone());
    info!(
        "Classifier ready (backend: {}, {} reference examples)",
        state.classifier.backend(),
        REFERENCE_SET.len()
    );
    info!(
        "Skill vocabulary: {} entries, {} learning resources",
        KNOWN_SKILLS.len(),
        RESOURCE_TABLE.len()
    );
    info!("Request body limit: {} bytes", config.max_upload_bytes);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("Invalid listen address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
