//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkStats, LinkWithStats};

/// Request to create a link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Target URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "invalid url"))]
    pub url: String,

    /// Optional custom slug; empty or absent means "generate one".
    pub slug: Option<String>,
}

/// Aggregated click statistics as exposed on the wire.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl From<LinkStats> for LinkStatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            clicks: stats.clicks,
            last_clicked_at: stats.last_clicked_at,
        }
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<LinkStatsResponse>,
}

impl LinkResponse {
    /// Builds the wire shape, deriving `short_url` from the request origin.
    pub fn from_link(link: Link, stats: Option<LinkStats>, origin: &str) -> Self {
        Self {
            short_url: format!("{}/{}", origin.trim_end_matches('/'), link.slug),
            id: link.id,
            slug: link.slug,
            url: link.url,
            created_at: link.created_at,
            stats: stats.map(LinkStatsResponse::from),
        }
    }

    pub fn from_link_with_stats(entry: LinkWithStats, origin: &str) -> Self {
        Self::from_link(entry.link, entry.stats, origin)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub link: LinkResponse,
}

#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub links: Vec<LinkResponse>,
}
