//! Neon EEG Motor Predictor
//!
//! Single-page demo server for a heuristic motor-imagery predictor.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  NEON EEG PREDICTOR                       │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  Page     │──▶│  API         │──▶│  Predictor       │  │
//! │  │  (HTML)   │   │  (Axum)      │   │  score + softmax │  │
//! │  └───────────┘   └──────────────┘   └──────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod predictor;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::check));

    let api_routes = Router::new()
        .route("/api/v1/features", get(handlers::features::layout))
        .route("/api/v1/predict", post(handlers::predict::create))
        .route("/api/v1/predict/default", get(handlers::predict::default));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
