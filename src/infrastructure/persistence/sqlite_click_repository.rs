//! SQLite implementation of the click repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

use crate::domain::entities::{LinkStats, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use crate::utils::timefmt;

/// SQLite repository for the append-only click ledger.
pub struct SqliteClickRepository {
    pool: SqlitePool,
}

impl SqliteClickRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for SqliteClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO clicks (link_id, clicked_at, user_agent, ip_address) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(new_click.link_id)
        .bind(timefmt::to_storage(Utc::now()))
        .bind(&new_click.user_agent)
        .bind(&new_click.ip_address)
        .execute(&self.pool)
        .await?;

        tracing::debug!(link_id = new_click.link_id, "click recorded");
        Ok(())
    }

    async fn stats_for(&self, link_id: i64) -> Result<LinkStats, AppError> {
        let (clicks, last_clicked_at): (i64, Option<String>) = sqlx::query_as(
            "SELECT COUNT(*), MAX(clicked_at) FROM clicks WHERE link_id = ?1",
        )
        .bind(link_id)
        .fetch_one(&self.pool)
        .await?;

        let last_clicked_at = last_clicked_at
            .as_deref()
            .map(timefmt::from_storage)
            .transpose()
            .map_err(|e| {
                tracing::error!(link_id, error = %e, "unreadable clicked_at in clicks row");
                AppError::internal("database error", json!({}))
            })?;

        Ok(LinkStats {
            clicks,
            last_clicked_at,
        })
    }
}
