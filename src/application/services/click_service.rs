//! Click recording and aggregation.

use std::sync::Arc;

use crate::domain::entities::{LinkStats, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Orchestrates the click ledger.
///
/// Callers decide how much a recording failure matters: the redirect handler
/// logs and moves on, never blocking the visitor-facing response.
pub struct ClickService {
    clicks: Arc<dyn ClickRepository>,
}

impl ClickService {
    pub fn new(clicks: Arc<dyn ClickRepository>) -> Self {
        Self { clicks }
    }

    /// Appends one ledger row for a resolved redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record(
        &self,
        link_id: i64,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Result<(), AppError> {
        self.clicks
            .record(NewClick {
                link_id,
                user_agent,
                ip_address,
            })
            .await
    }

    /// Aggregated statistics for one link; zero-valued when unclicked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats_for(&self, link_id: i64) -> Result<LinkStats, AppError> {
        self.clicks.stats_for(link_id).await
    }
}
