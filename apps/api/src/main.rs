mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::panic_response;
use crate::llm_client::{CoverLetterWriter, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TailorCover API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize remote writer only when both the flag and the key are present
    let writer = build_writer(&config)?;

    let cors = build_cors(&config)?;

    let state = AppState {
        config: config.clone(),
        writer,
    };

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_writer(config: &Config) -> Result<Option<Arc<dyn CoverLetterWriter>>> {
    let api_key = match (&config.openai_api_key, config.use_remote()) {
        (Some(key), true) => key.clone(),
        _ => {
            if config.enable_llm {
                warn!("ENABLE_LLM=1 but OPENAI_API_KEY is not set; using local mode");
            } else {
                info!("LLM mode disabled; using local template generation");
            }
            return Ok(None);
        }
    };

    let client = LlmClient::new(
        api_key,
        config.openai_model.clone(),
        config.openai_base_url.clone(),
        config.llm_timeout,
    )
    .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        client.model(),
        config.llm_timeout
    );

    let writer: Arc<dyn CoverLetterWriter> = Arc::new(client);
    Ok(Some(writer))
}

/// Permissive when no origins are configured, otherwise an explicit allow-list.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o.trim_end_matches('/'))
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600)))
}
