//! Handler for short identifier resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{num}`
///
/// Issues a `302 Found` redirect to the stored URL. A `num` that does not
/// parse as an integer was never assigned, so it gets the same 404 as an
/// unknown identifier.
///
/// # Errors
///
/// Returns 404 `{"error": "URL not found"}` if the identifier has no
/// mapping and 500 `{"error": "Server error"}` on store failure.
pub async fn resolve_handler(
    Path(num): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let short_id: i64 = num
        .parse()
        .map_err(|_| AppError::not_found("URL not found"))?;

    let mapping = state.mapping_service.resolve(short_id).await?;

    tracing::debug!(short_id, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url)],
    ))
}
