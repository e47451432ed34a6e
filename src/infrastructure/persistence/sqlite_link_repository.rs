//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::timefmt;

/// Row shape shared by every `links` query.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    url: String,
    created_at: String,
}

impl LinkRow {
    fn into_link(self) -> Result<Link, AppError> {
        let created_at = timefmt::from_storage(&self.created_at).map_err(|e| {
            tracing::error!(id = self.id, error = %e, "unreadable created_at in links row");
            AppError::internal("database error", json!({}))
        })?;

        Ok(Link {
            id: self.id,
            slug: self.slug,
            url: self.url,
            created_at,
        })
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Every mutation is a single statement; the database is the serialization
/// point for concurrent writers.
pub struct SqliteLinkRepository {
    pool: SqlitePool,
}

impl SqliteLinkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO links (slug, url, created_at) VALUES (?1, ?2, ?3)")
            .bind(&new_link.slug)
            .bind(&new_link.url)
            .bind(timefmt::to_storage(created_at))
            .execute(&self.pool)
            .await?;

        Ok(Link {
            id: result.last_insert_rowid(),
            slug: new_link.slug,
            url: new_link.url,
            created_at,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            "SELECT id, slug, url, created_at FROM links WHERE slug = ?1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LinkRow::into_link).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows: Vec<LinkRow> =
            sqlx::query_as("SELECT id, slug, url, created_at FROM links ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(LinkRow::into_link).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
