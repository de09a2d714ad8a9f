//! Identifier assignment and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::url_check::validate_web_url;

/// Bounded number of get-or-create attempts when candidate identifiers race.
const MAX_ATTEMPTS: usize = 3;

/// Service for assigning short identifiers and resolving them back to URLs.
///
/// All business rules live here; handlers only translate HTTP. The service
/// keeps no state of its own between requests and never caches mappings.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self { repository }
    }

    /// Assigns a short identifier to `original_url`, or returns the existing
    /// mapping if the URL was submitted before.
    ///
    /// The candidate identifier is the current mapping count plus one. Two
    /// concurrent submissions of *different* URLs can compute the same
    /// candidate; the storage uniqueness constraint on `short_id` detects
    /// the loser, which recomputes and retries up to [`MAX_ATTEMPTS`] times.
    /// Concurrent submissions of the *same* URL are resolved by the
    /// `original_url` constraint inside the repository and need no retry.
    ///
    /// Idempotent from the caller's perspective: resubmitting a URL always
    /// yields the identifier assigned on first submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is not an absolute
    /// http/https URL. Returns [`AppError::Internal`] on storage failure or
    /// when the retry budget is exhausted.
    pub async fn submit(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        if let Err(reason) = validate_web_url(original_url) {
            tracing::debug!(%reason, "rejected submission");
            return Err(AppError::bad_request("invalid url"));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let candidate_id = self.repository.count_all().await? + 1;

            match self
                .repository
                .find_or_create(original_url, candidate_id)
                .await
            {
                Ok((mapping, created)) => {
                    if created {
                        tracing::info!(short_id = mapping.short_id, "created mapping");
                    }
                    return Ok(mapping);
                }
                Err(e) if e.is_conflict() => {
                    tracing::warn!(candidate_id, attempt, "candidate identifier taken, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "identifier assignment failed after {MAX_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a short identifier to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier was never assigned.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_id: i64) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Total number of stored mappings. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn mapping_count(&self) -> Result<i64, AppError> {
        self.repository.count_all().await
    }
}
