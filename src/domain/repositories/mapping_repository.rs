//! Repository trait for URL mapping data access.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// The storage layer owns both uniqueness guarantees: uniqueness of
/// `original_url` is what makes [`find_or_create`](Self::find_or_create)
/// safe under concurrent identical submissions, and uniqueness of `short_id`
/// is what detects candidate-identifier races between different URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - in-memory backend for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Counts all stored mappings. Side-effect-free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError>;

    /// Returns the existing mapping for `original_url`, or atomically inserts
    /// a new one with `short_id = candidate_id`.
    ///
    /// The boolean is `true` when a new record was created. At most one row
    /// is ever created per distinct `original_url`, even under concurrent
    /// calls racing on the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `candidate_id` collides with a
    /// concurrently inserted mapping for a *different* URL; callers should
    /// recompute the candidate and retry. Returns [`AppError::Internal`] on
    /// other storage errors.
    async fn find_or_create(
        &self,
        original_url: &str,
        candidate_id: i64,
    ) -> Result<(UrlMapping, bool), AppError>;
}
