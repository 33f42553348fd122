//! HTTP surface: sessions, traces and verdicts
//!
//! Every route is served both at the root and under `/api`.

pub mod api_types;
mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracemon_core::Monitor;
use tracemon_store::TraceStorage;
use tracing::info;

/// Shared state behind every handler
pub struct AppState {
    pub storage: Arc<dyn TraceStorage>,
    pub monitor: Arc<Monitor>,
}

impl AppState {
    pub fn new(storage: Arc<dyn TraceStorage>, monitor: Arc<Monitor>) -> Self {
        Self { storage, monitor }
    }
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/sessions",
            post(handlers::create_session).get(handlers::list_sessions),
        )
        .route("/sessions/{id}", delete(handlers::delete_session))
        .route("/traces/{id}", get(handlers::read_trace))
        .route("/traces/{id}/append", post(handlers::append_trace))
        .route("/traces/{id}/overwrite", post(handlers::overwrite_trace))
        .route("/monitors/{id}", get(handlers::monitor_verdict))
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Serve `app` on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
