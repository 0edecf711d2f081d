mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::chat::engine::ChatEngine;
use crate::chat::knowledge_base::KnowledgeBase;
use crate::chat::rate_limiter::{spawn_sweeper, RateLimiter};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting coach chat API v{}", env!("CARGO_PKG_VERSION"));

    let knowledge_base = Arc::new(KnowledgeBase::builtin());
    info!(
        "Knowledge base loaded: {} records, {} suggested topics",
        knowledge_base.len(),
        knowledge_base.suggested_topics().len()
    );

    let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit));
    spawn_sweeper(Arc::clone(&rate_limiter), config.rate_limit_sweep);
    info!(
        "Rate limiter: {} requests per {:?}, sweep every {:?}",
        config.rate_limit.max_requests, config.rate_limit.window, config.rate_limit_sweep
    );

    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.primary_model.clone(),
        config.fallback_model.clone(),
        config.generator_timeout,
    )?;
    info!(
        "LLM client initialized (primary: {}, fallback: {}, timeout: {:?})",
        config.primary_model, config.fallback_model, config.generator_timeout
    );

    let engine = ChatEngine::new(
        knowledge_base,
        rate_limiter,
        Arc::new(llm),
        config.generator_timeout,
    );

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
