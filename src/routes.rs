//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                   - Static landing page
//! - `GET  /health`             - Health check
//! - `POST /api/shorturl`       - Assign a short identifier
//! - `GET  /api/shorturl/{num}` - Redirect to the original URL
//! - `/static/*`                - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
