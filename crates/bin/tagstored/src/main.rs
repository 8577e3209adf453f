//! # tagstored — tagstore daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tagstore_adapter_http_axum::auth::AuthKeys;
use tagstore_adapter_http_axum::state::AppState;
use tagstore_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteItemRepository, SqliteStoreRepository, SqliteTagRepository,
};
use tagstore_app::services::item_service::ItemService;
use tagstore_app::services::store_service::StoreService;
use tagstore_app::services::tag_service::TagService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories — the tag service carries its own store and item
    // repository handles for existence checks.
    let store_repo = SqliteStoreRepository::new(pool.clone());
    let tag_repo = SqliteTagRepository::new(pool.clone());
    let item_repo = SqliteItemRepository::new(pool.clone());

    // Services
    let store_service = StoreService::new(store_repo);
    let tag_service = TagService::new(
        tag_repo,
        SqliteStoreRepository::new(pool.clone()),
        SqliteItemRepository::new(pool),
    );
    let item_service = ItemService::new(item_repo);

    // HTTP
    let state = AppState::new(
        store_service,
        tag_service,
        item_service,
        AuthKeys::new(&config.auth.secret),
    );
    let app = tagstore_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "tagstored listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
