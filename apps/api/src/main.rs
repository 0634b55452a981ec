mod config;
mod errors;
mod localize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pseudoloc_core::{
    ExpansionPolicy, FixedTierPolicy, PolicyTable, ProfileBasedPolicy, Transformer, DEFAULT_GLYPHS,
};

use crate::config::{Config, PolicyMode};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pseudoloc API v{}", env!("CARGO_PKG_VERSION"));

    // Engine tables are built once here and shared read-only across requests.
    let policy: Arc<dyn ExpansionPolicy> = match config.policy_mode {
        PolicyMode::Profile => Arc::new(ProfileBasedPolicy::new(PolicyTable::builtin())),
        PolicyMode::FixedTier => Arc::new(FixedTierPolicy),
    };
    info!("Expansion policy: {:?}", config.policy_mode);

    let transformer = Arc::new(Transformer::new(&DEFAULT_GLYPHS, policy));
    info!(
        "Defaults: language={} category={}",
        config.default_language, config.default_category
    );

    // Build app state
    let state = AppState {
        transformer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
