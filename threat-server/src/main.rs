//! ThreatWatch Server
//!
//! IP threat intelligence lookups backed by three external providers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     THREATWATCH SERVER                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │  GET /api/threats?ip=                                        │
//! │        │                                                     │
//! │        ├── cache hit ──────────────────────────────┐         │
//! │        ▼                                           │         │
//! │  ┌───────────┐  ┌──────────────┐  ┌──────────┐     │         │
//! │  │ AbuseIPDB │  │IPQualityScore│  │  ipapi   │     │         │
//! │  └─────┬─────┘  └──────┬───────┘  └────┬─────┘     │         │
//! │        └───────────────┼───────────────┘           │         │
//! │                        ▼                           ▼         │
//! │              aggregate (threatwatch-core)  ──►  history      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod lookup;
mod providers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::get,
    Router,
};
use parking_lot::{Mutex, RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threatwatch_core::{LookupHistory, RiskLevel, ThreatRecord, TtlCache};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    init_tracing(config.is_production());

    tracing::info!(
        "{} server starting ({})...",
        threatwatch_core::constants::APP_NAME,
        config.environment
    );
    if config.abuseipdb_api_key.is_none() {
        tracing::warn!("ABUSEIPDB_API_KEY is not set, reputation lookups will fail");
    }
    if config.ipqs_api_key.is_none() {
        tracing::warn!("IPQS_API_KEY is not set, fraud-signal lookups will fail");
    }

    // Build application state
    let state = AppState::new(config.clone())?;

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// JSON log lines in production, human-readable otherwise
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "threatwatch_server=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub http: reqwest::Client,
    pub cache: Arc<TtlCache<String, ThreatRecord>>,
    pub history: Arc<RwLock<LookupHistory>>,
    /// Held while writing `HISTORY_FILE`
    pub save_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.provider_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        let history = match &config.history_file {
            Some(path) => LookupHistory::load_from(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load lookup history from {}: {}", path.display(), e);
                LookupHistory::new()
            }),
            None => LookupHistory::new(),
        };

        Ok(Self {
            config,
            http,
            cache: Arc::new(TtlCache::new()),
            history: Arc::new(RwLock::new(history)),
            save_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Risk label under the configured thresholds
    pub fn risk_level(&self, record: Option<&ThreatRecord>) -> RiskLevel {
        RiskLevel::for_record(record, &self.config.thresholds)
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/threats", get(handlers::threats::lookup))
        .route(
            "/api/history",
            get(handlers::history::list).delete(handlers::history::clear),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
