//! Repository trait for the click ledger.

use crate::domain::entities::{LinkStats, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click recording and aggregation.
///
/// The ledger is append-only: rows are inserted once and only ever removed
/// by the cascade when their link is deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteClickRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a ledger row stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_click: NewClick) -> Result<(), AppError>;

    /// Aggregates `COUNT(*)` and `MAX(clicked_at)` for a link.
    ///
    /// A link with no clicks yields [`LinkStats::zero`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn stats_for(&self, link_id: i64) -> Result<LinkStats, AppError>;
}
