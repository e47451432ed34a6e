//! Handlers for login and logout.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect},
};

use crate::api::dto::login::LoginRequest;
use crate::auth::{Credentials, SessionCookie};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::origin::connection_secure;

/// Exchanges credentials for a session cookie.
///
/// # Endpoint
///
/// `POST /login`
///
/// Responds `204 No Content` with a `Set-Cookie` header on success and
/// `401 Unauthorized` on any mismatch; the error never says which field was
/// wrong.
pub async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let submitted = Credentials {
        username: payload.username,
        password: payload.password,
    };

    let cookie = state
        .authenticator
        .authenticate(&submitted, connection_secure(&headers))?;

    Ok((
        [(header::SET_COOKIE, cookie.header_value())],
        StatusCode::NO_CONTENT,
    ))
}

/// Clears the session cookie and returns to the login page.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, SessionCookie::expired().header_value())],
        Redirect::to("/"),
    )
}
