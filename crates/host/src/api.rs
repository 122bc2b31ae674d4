//! HTTP routes serving the portfolio page
//!
//! Static assets come from the embedded bundle; `/config.js` hands the page
//! its runtime configuration.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use portfolio_core::PageConfig;
use tower_http::trace::TraceLayer;

use crate::embedded;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// Shared state
#[derive(Clone)]
pub struct AppState {
    pub page: Arc<PageConfig>,
}

impl AppState {
    pub fn new(page: PageConfig) -> Self {
        Self {
            page: Arc::new(page),
        }
    }
}

// Routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/config.js", get(serve_config_js))
        .route("/", get(serve_index))
        .route("/*path", get(serve_static))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Handlers

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": VERSION }))
}

/// `window.PORTFOLIO_CONFIG = {...};`
pub fn config_script(page: &PageConfig) -> serde_json::Result<String> {
    Ok(format!(
        "window.PORTFOLIO_CONFIG = {};",
        serde_json::to_string(page)?
    ))
}

async fn serve_config_js(State(state): State<AppState>) -> Response {
    match config_script(&state.page) {
        Ok(js) => (
            [
                (header::CONTENT_TYPE, "application/javascript"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            js,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode page config");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn serve_index() -> Response {
    serve_asset("index.html")
}

/// Serve embedded static file, falling back to the page for unknown paths
async fn serve_static(Path(path): Path<String>) -> Response {
    serve_asset(&path)
}

fn serve_asset(path: &str) -> Response {
    if let Some((data, mime)) = embedded::get_asset(path) {
        return (
            [
                (header::CONTENT_TYPE, mime),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            data,
        )
            .into_response();
    }

    tracing::debug!(path, "Unknown asset, serving index.html");
    match embedded::get_asset("index.html") {
        Some((data, mime)) => ([(header::CONTENT_TYPE, mime)], data).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
