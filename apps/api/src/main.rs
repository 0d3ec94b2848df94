mod config;
mod document;
mod errors;
mod models;
mod render;
mod routes;
mod scoring;
mod session;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the key-value backend
    let store: Arc<dyn KeyValueStore> = match &config.storage_path {
        Some(path) => Arc::new(JsonFileStore::new(path.clone())),
        None => {
            info!("No STORAGE_PATH set, session is in-memory only");
            Arc::new(MemoryStore::default())
        }
    };

    // Restore the last saved document and preferences
    let session = Session::restore(store).await;
    let state = AppState::new(session, config.clone());

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
