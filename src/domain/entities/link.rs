//! Link entity representing a slug-to-URL mapping.

use chrono::{DateTime, Utc};

use crate::domain::entities::click::LinkStats;

/// A shortened link.
///
/// `id` and `slug` are immutable once assigned; `slug` is unique across all
/// links, enforced by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}

/// A link paired with its aggregated click statistics.
///
/// `stats` is `None` when aggregation was skipped or failed for this entry;
/// a link that simply has no clicks yet carries zero-valued stats instead.
#[derive(Debug, Clone)]
pub struct LinkWithStats {
    pub link: Link,
    pub stats: Option<LinkStats>,
}
