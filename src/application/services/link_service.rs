//! Link creation, lookup, listing, and deletion.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::{Link, LinkWithStats, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::slug::{generate_slug, validate_custom_slug};

/// Orchestrates link operations over the repositories.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl LinkService {
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Creates a link, generating a slug when none is supplied.
    ///
    /// The insert is attempted once. A uniqueness violation surfaces as
    /// [`AppError::Conflict`] for explicit and generated slugs alike; there
    /// is no retry with a fresh random slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid target URL or custom
    /// slug, [`AppError::Conflict`] when the slug exists.
    pub async fn create(&self, url: String, slug: Option<String>) -> Result<Link, AppError> {
        validate_target_url(&url)?;

        let slug = match slug.filter(|s| !s.is_empty()) {
            Some(custom) => {
                validate_custom_slug(&custom)?;
                custom
            }
            None => generate_slug(),
        };

        self.links.create(NewLink { slug, url }).await
    }

    /// Resolves a slug to its link. Exact match only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug is unknown.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Link, AppError> {
        self.links.find_by_slug(slug).await?.ok_or_else(|| {
            AppError::not_found("link not found", json!({ "slug": slug }))
        })
    }

    /// Lists every link newest-first, each with its current click stats.
    ///
    /// One aggregation query per link; fine at this system's scale. A failed
    /// aggregation degrades that entry to `stats: None` instead of failing
    /// the listing.
    pub async fn list_all(&self) -> Result<Vec<LinkWithStats>, AppError> {
        let links = self.links.list_all().await?;

        let mut out = Vec::with_capacity(links.len());
        for link in links {
            let stats = match self.clicks.stats_for(link.id).await {
                Ok(stats) => Some(stats),
                Err(e) => {
                    tracing::warn!(link_id = link.id, error = %e, "stats aggregation failed");
                    None
                }
            };
            out.push(LinkWithStats { link, stats });
        }

        Ok(out)
    }

    /// Deletes a link by id; its click rows go with it via cascade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row matched — deleting a
    /// missing id is an explicit error, not an idempotent success.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.links.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("link not found", json!({ "id": id })))
        }
    }
}

fn validate_target_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::bad_request("invalid url", json!({ "reason": e.to_string() })))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "url must use http or https",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    Ok(())
}
