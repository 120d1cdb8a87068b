//! Tourhub - a tour and activity marketplace web frontend

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tourhub::{
    backend::BackendClient,
    cache::MemoryCache,
    config::Config,
    session::SessionStore,
    view::Renderer,
    web::{self, AppState, RequestStats},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourhub=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tourhub frontend...");

    // Load configuration
    let config = Config::load(Path::new("config.yml"))?;
    tracing::info!(backend = %config.backend.base_url, "Configuration loaded");

    // Initialize the revalidation cache
    let cache = Arc::new(MemoryCache::with_capacity_and_ttl(
        config.cache.capacity,
        Duration::from_secs(config.cache.ttl_seconds),
    ));
    tracing::info!("Cache initialized");

    // Backend API client
    let backend = Arc::new(BackendClient::new(&config.backend, cache)?);

    // Session store with a background purge task (runs every 5 minutes)
    let sessions = Arc::new(SessionStore::with_expiration_days(
        config.session.expiration_days,
    ));
    {
        let store = sessions.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));
            loop {
                interval.tick().await;
                let purged = store.purge_expired().await;
                if purged > 0 {
                    tracing::debug!(purged, "Purged expired sessions");
                }
            }
        });
    }

    // Template renderer
    let renderer = Arc::new(Renderer::new(Path::new("templates"))?);
    tracing::info!("Templates loaded");

    // Build application state
    let state = AppState {
        config: Arc::new(config.clone()),
        backend,
        sessions,
        renderer,
        request_stats: Arc::new(RequestStats::new()),
    };

    // Build router
    let app = web::build_router(state, &config.server.cors_origin)?;

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
