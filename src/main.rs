//! Phishing Link Detector API
//!
//! Classifies URLs as phishing or benign with a pre-trained model.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  PHISHING LINK DETECTOR                  │
//! ├──────────────────────────────────────────────────────────┤
//! │  POST /predict                                           │
//! │     │                                                    │
//! │     ▼                                                    │
//! │  ┌──────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  Parse   │──▶│   Feature    │──▶│    Classifier    │  │
//! │  │  (JSON)  │   │  Extraction  │   │  (ONNX / JSON)   │  │
//! │  └──────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod features;
mod handlers;
mod middleware;
mod model;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

use crate::model::Classifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    let config = config::Config::from_env();

    // Initialize logging
    let json_logs = config.log_format == config::LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "phishguard=info,tower_http=info".into()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Phishing Link Detector starting...");

    // Loaded once, shared read-only by every request
    let classifier = model::load_classifier(&config.model_path)
        .with_context(|| format!("Failed to load classifier from {}", config.model_path))?;

    let state = AppState {
        classifier,
        config: config.clone(),
    };

    let app = create_router(state).context("Invalid CORS origin pattern")?;

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Result<Router, regex::Error> {
    let origins = middleware::cors::compile_patterns(&state.config.allowed_origins)?;
    for origin in &origins {
        tracing::info!("/predict allows origin: {}", origin.as_str());
    }

    // Open to any origin
    let public_routes = Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::check))
        .layer(middleware::cors::permissive());

    let predict_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_log::log_request,
        ))
        .layer(middleware::cors::restricted(origins))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    Ok(Router::new()
        .merge(public_routes)
        .merge(predict_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
