//! Route table

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::{handlers, AppState};

/// Build the application router
///
/// `docs_dir` is served as-is under `/docs`; a missing directory simply
/// yields 404s there.
#[tracing::instrument(skip_all)]
pub fn build(state: AppState, docs_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/data/teziutlan", get(handlers::regional))
        .route("/data/nacional", get(handlers::national))
        .nest_service("/docs", ServeDir::new(docs_dir))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
