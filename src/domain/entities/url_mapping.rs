//! The persisted pairing of an original URL and its short identifier.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// Both fields are unique across all records: no two mappings share a
/// `short_id` and no two mappings share an `original_url`. Identifiers are
/// assigned starting at 1 in order of first submission. A mapping is created
/// exactly once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    /// The integer handle used in the redirect path.
    pub short_id: i64,
    /// The full validated URL supplied by the caller, stored verbatim.
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(short_id: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}
