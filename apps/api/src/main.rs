mod analysis;
mod config;
mod errors;
mod extract;
mod narrative;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::narrative::client::LlmClient;
use crate::narrative::{LlmNarrativeProvider, NarrativeProvider};
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

    info!("Starting ResumeEnhancer API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        max_keywords = config.analysis.max_keywords,
        min_token_length = config.analysis.min_token_length,
        stop_words = config.analysis.stop_words.len(),
        "Analysis pipeline configured"
    );

    // Narrative endpoint is optional
    let narrator: Option<Arc<dyn NarrativeProvider>> = match &config.narrative {
        Some(narrative) => {
            let client = LlmClient::new(narrative).context("failed to build LLM client")?;
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(LlmNarrativeProvider(client)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; /api/v1/narrative will answer 503");
            None
        }
    };

    let cors = build_cors(&config.cors_origins)?;
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    let app = build_router(AppState::new(config, narrator))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
