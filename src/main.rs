use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod admin;
mod config;
mod error;
mod handlers;
mod models;
mod store;

use crate::admin::AdminPortal;
use crate::config::Config;
use crate::store::ItemStore;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub admin: Arc<AdminPortal>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,item_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Item Service  — Rust + Axum         ║");
    info!("╚══════════════════════════════════════╝");

    // The portal rejects an empty password, so the process never serves
    // without the admin gate configured.
    let admin = AdminPortal::new(config.admin_password)?;
    let store = ItemStore::new();
    info!(items = store.len().await, "Store seeded");

    let state = AppState {
        store: Arc::new(store),
        admin: Arc::new(admin),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Homepage & health ───────────────────────────────────────────────
        .route("/", any(handlers::home))
        .route("/health", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        // Static routes take precedence over the `:id` capture, so `list`
        // and `create` never reach the lookup handler.
        .route("/items/list", any(handlers::items::list_items))
        .route("/items/create", any(handlers::items::create_item))
        .route("/items/:id", any(handlers::items::get_item))

        // ── Admin ───────────────────────────────────────────────────────────
        .route("/admin", any(handlers::admin::admin_portal))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
