//! Neon EEG Motor Predictor server
//!
//! Serves the predictor page and its JSON API.
//!
//! ```bash
//! PORT=8080 PREDICT_DELAY_MS=2200 eeg-predictor
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eeg_predictor::{config::Config, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "eeg_predictor=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Neon EEG Predictor v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Environment: {}, simulated delay: {} ms",
        config.environment,
        config.predict_delay.as_millis()
    );

    let addr = config.socket_addr()?;
    let app = create_router(AppState { config });

    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
