//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a client-side-rendered bundle, so the server only hands out
//! files. Any path that is not a file falls back to `index.html` and the
//! client router resolves it; that is what makes a cold load of `/admin`
//! work.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full router: health check plus the static site.
pub fn app(config: &ServerConfig) -> Router {
    let index = ServeFile::new(config.site_dir.join("index.html"));
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
