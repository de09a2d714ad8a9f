//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes.
///
/// # Endpoints
///
/// - `POST /shorturl`       - Assign a short identifier to a URL
/// - `GET  /shorturl/{num}` - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{num}", get(resolve_handler))
}
