mod config;
mod document;
mod errors;
mod render;
mod routes;
mod state;
mod suggestions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::DocumentStore;
use crate::render::render;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::{HttpSuggestionService, SuggestionCoordinator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // One document per process: the editing session lives as long as the server.
    let store = DocumentStore::new();
    spawn_render_watcher(&store);

    // Initialize suggestion service client
    let service = Arc::new(HttpSuggestionService::new(
        config.suggestion_service_url.clone(),
    ));
    info!(
        "Suggestion service client initialized (endpoint: {})",
        config.suggestion_service_url
    );
    let coordinator = SuggestionCoordinator::new(service, store.clone());

    let state = AppState { store, coordinator };

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

/// Re-renders every published snapshot, mirroring what the view layer does
/// on each change notification.
fn spawn_render_watcher(store: &DocumentStore) {
    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let snapshot = changes.borrow_and_update().clone();
            let view = render(&snapshot);
            debug!(sections = view.sections.len(), "Document changed");
        }
    });
}
