//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Form-encoded body of `POST /api/shorturl`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// The original URL to shorten (must be an absolute http/https URL).
    pub url: String,
}

/// Successful shortening response.
///
/// `short_url` carries the numeric identifier itself; `test_url` is the
/// fully-qualified resolution URL built from the requesting host.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
    pub test_url: String,
}
