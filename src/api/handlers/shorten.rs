//! Handler for the URL shortening endpoint.

use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, Uri},
};

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Assigns a short identifier to a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl` (form-encoded field `url`)
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": 1,
///   "test_url": "http://localhost:3000/api/shorturl/1"
/// }
/// ```
///
/// Resubmitting a previously seen URL returns the identifier assigned on
/// first submission; no new record is created.
///
/// # Errors
///
/// Returns 400 `{"error": "invalid url"}` if the URL fails validation and
/// 500 `{"error": "Server error"}` on store failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    let mapping = state.mapping_service.submit(&form.url).await?;

    let base_url = request_base_url(&headers, &uri);
    let test_url = format!("{}/api/shorturl/{}", base_url, mapping.short_id);

    Ok(Json(ShortenResponse {
        original_url: mapping.original_url,
        short_url: mapping.short_id,
        test_url,
    }))
}
