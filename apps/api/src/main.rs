mod config;
mod errors;
mod llm_client;
mod recipes;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderValue, Method, Request},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sanji API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = OpenAiClient::from_config(&config).context("Failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let cors = build_cors(&config)?;

    // Build app state
    let state = AppState {
        gateway: Arc::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive unless an explicit origin list is configured.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        info!("CORS: allowing any origin");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("CORS: allowing {:?}", config.cors_allowed_origins);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}
