//! Handler for the public slug redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Resolves a slug and redirects to its target URL.
///
/// # Endpoint
///
/// `GET /{slug}` — public, no authentication.
///
/// One click-ledger write is attempted per resolved redirect. The write is
/// best-effort: a storage failure is logged and the visitor is redirected
/// regardless. Responds `404` when the slug is unknown.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.get_by_slug(&slug).await?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let ip_address = extract_client_ip(&headers, addr);

    tracing::info!(slug = %slug, ip = %ip_address, "redirecting");

    if let Err(e) = state
        .click_service
        .record(link.id, user_agent, Some(ip_address))
        .await
    {
        tracing::error!(slug = %slug, error = %e, "failed to record click");
    }

    Ok(Redirect::permanent(&link.url))
}
