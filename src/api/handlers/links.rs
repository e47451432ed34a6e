//! Handlers for link management endpoints (create, list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, LinkResponse, ListLinksResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::origin::request_origin;

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// Responds `201 Created` with the stored link (stats absent — a new link
/// has none), `400` on a missing/invalid URL or malformed slug, `409` when
/// the slug already exists. The conflict is surfaced for generated slugs
/// too; the client simply retries.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create(payload.url, payload.slug).await?;

    tracing::info!(slug = %link.slug, id = link.id, "link created");

    let origin = request_origin(&headers);
    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            link: LinkResponse::from_link(link, None, &origin),
        }),
    ))
}

/// Lists all links, newest first, with click statistics.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ListLinksResponse>, AppError> {
    let entries = state.link_service.list_all().await?;

    let origin = request_origin(&headers);
    let links = entries
        .into_iter()
        .map(|entry| LinkResponse::from_link_with_stats(entry, &origin))
        .collect();

    Ok(Json(ListLinksResponse { links }))
}

/// Deletes a link and, via cascade, its click records.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Responds `204 No Content` on success and `404` when the id is unknown —
/// deleting a missing link is an error, not a no-op.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(id).await?;

    tracing::info!(id, "link deleted");
    Ok(StatusCode::NO_CONTENT)
}
