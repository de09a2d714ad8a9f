//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL mapping storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Get-or-create
/// is a single `INSERT ... ON CONFLICT DO NOTHING` so that concurrent
/// submissions of the same URL can never create two rows.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT short_id, original_url, created_at
            FROM url_mappings
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_or_create(
        &self,
        original_url: &str,
        candidate_id: i64,
    ) -> Result<(UrlMapping, bool), AppError> {
        // DO NOTHING applies only to the original_url constraint; a short_id
        // collision still raises a unique violation, mapped to
        // AppError::Conflict for the service's retry loop.
        let inserted = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (original_url, short_id)
            VALUES ($1, $2)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING short_id, original_url, created_at
            "#,
        )
        .bind(original_url)
        .bind(candidate_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(mapping) = inserted {
            return Ok((mapping, true));
        }

        // The URL was already present (or a concurrent caller just inserted
        // it); either way the committed row is the answer.
        let existing = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT short_id, original_url, created_at
            FROM url_mappings
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| {
            AppError::internal(format!(
                "mapping for URL vanished between insert and select: {original_url}"
            ))
        })?;

        Ok((existing, false))
    }
}
