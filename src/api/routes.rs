//! API route configuration.
//!
//! All endpoints here require authentication via
//! [`crate::api::middleware::auth`].

use axum::{
    Router,
    routing::{delete, get},
};

use crate::api::handlers::{create_link_handler, delete_link_handler, list_links_handler};
use crate::state::AppState;

/// Link management routes, protected by the strategy-chain middleware.
///
/// # Endpoints
///
/// - `POST   /links`       - Create a link (custom or generated slug)
/// - `GET    /links`       - List links, newest first, with stats
/// - `DELETE /links/{id}`  - Delete a link and its click records
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{id}", delete(delete_link_handler))
}
