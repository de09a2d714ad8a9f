//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    by_url: HashMap<String, UrlMapping>,
    by_id: HashMap<i64, String>,
}

/// In-memory mapping store used by tests and database-free development.
///
/// A single mutex guards both indexes so that get-or-create observes the
/// same atomicity and dual-uniqueness guarantees as the PostgreSQL schema:
/// one row per `original_url`, and a `short_id` collision reported as a
/// retryable conflict.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    inner: Mutex<Inner>,
}

impl InMemoryMappingRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn count_all(&self) -> Result<i64, AppError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| AppError::internal("mapping store lock poisoned"))?;

        Ok(inner.by_url.len() as i64)
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| AppError::internal("mapping store lock poisoned"))?;

        Ok(inner
            .by_id
            .get(&short_id)
            .and_then(|url| inner.by_url.get(url))
            .cloned())
    }

    async fn find_or_create(
        &self,
        original_url: &str,
        candidate_id: i64,
    ) -> Result<(UrlMapping, bool), AppError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| AppError::internal("mapping store lock poisoned"))?;

        if let Some(existing) = inner.by_url.get(original_url) {
            return Ok((existing.clone(), false));
        }

        if inner.by_id.contains_key(&candidate_id) {
            return Err(AppError::conflict(format!(
                "short_id {candidate_id} already assigned"
            )));
        }

        let mapping = UrlMapping::new(candidate_id, original_url.to_string(), Utc::now());
        inner
            .by_url
            .insert(original_url.to_string(), mapping.clone());
        inner.by_id.insert(candidate_id, original_url.to_string());

        Ok((mapping, true))
    }
}
