//! Click ledger entry input and derived statistics.

use chrono::{DateTime, Utc};

/// Input data for recording a click.
///
/// Rows are append-only and never read back individually, so there is no
/// corresponding full entity; aggregation happens through [`LinkStats`].
/// Client metadata is optional — headers may be missing or unparseable.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Aggregated click statistics for one link, computed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl LinkStats {
    /// Stats for a link that has never been clicked.
    pub fn zero() -> Self {
        Self {
            clicks: 0,
            last_clicked_at: None,
        }
    }
}
