//! Strategy-chain authentication middleware.
//!
//! Protected routes accept either a session cookie or HTTP basic auth. The
//! strategies are tried in a fixed order and the first one that grants
//! access wins; a strategy that cannot apply (missing header, stale or
//! malformed cookie) falls through instead of failing the request, so a
//! client holding a dead cookie can still authenticate with basic auth.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use serde_json::json;

use crate::auth::{Authenticator, COOKIE_NAME, Credentials, SessionCookie};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::origin::connection_secure;

/// Three-way result of one authentication attempt.
pub enum StrategyOutcome {
    /// Access granted; `cookie` is attached to the outgoing response.
    Granted {
        subject: String,
        cookie: Option<SessionCookie>,
    },
    /// The strategy had nothing to act on; the chain continues.
    NotApplicable,
    /// Hard stop: the chain ends without consulting later strategies.
    Denied,
}

/// One way of establishing identity from a request.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    async fn attempt(&self, authenticator: &Authenticator, parts: &mut Parts) -> StrategyOutcome;
}

/// Validates the `auth_token` cookie and re-issues it with a renewed window.
///
/// Token failures of any kind yield [`StrategyOutcome::NotApplicable`]: a
/// stale cookie must not block the basic-auth fallback.
pub struct CookieStrategy;

#[async_trait]
impl AuthStrategy for CookieStrategy {
    async fn attempt(&self, authenticator: &Authenticator, parts: &mut Parts) -> StrategyOutcome {
        let Some(token) = session_cookie_value(parts) else {
            return StrategyOutcome::NotApplicable;
        };

        let secure = connection_secure(&parts.headers);
        match authenticator.validate_and_refresh(&token, secure) {
            Ok((subject, refreshed)) => StrategyOutcome::Granted {
                subject,
                cookie: Some(refreshed),
            },
            Err(e) => {
                tracing::debug!(error = %e, "session cookie rejected, falling through");
                StrategyOutcome::NotApplicable
            }
        }
    }
}

/// Verifies `Authorization: Basic` credentials.
///
/// Success issues a fresh session cookie so the client's next request can
/// take the cheaper cookie path.
pub struct BasicAuthStrategy;

#[async_trait]
impl AuthStrategy for BasicAuthStrategy {
    async fn attempt(&self, authenticator: &Authenticator, parts: &mut Parts) -> StrategyOutcome {
        let Ok(AuthBasic((username, password))) =
            AuthBasic::from_request_parts(parts, &()).await
        else {
            return StrategyOutcome::NotApplicable;
        };

        let submitted = Credentials {
            username,
            password: password.unwrap_or_default(),
        };

        let secure = connection_secure(&parts.headers);
        match authenticator.authenticate(&submitted, secure) {
            Ok(cookie) => StrategyOutcome::Granted {
                subject: submitted.username,
                cookie: Some(cookie),
            },
            Err(_) => StrategyOutcome::NotApplicable,
        }
    }
}

/// Runs the fixed strategy chain: cookie first, then basic auth.
///
/// Returns the granting outcome, or `None` when every strategy fell through
/// or one denied outright.
pub(crate) async fn run_strategies(
    authenticator: &Authenticator,
    parts: &mut Parts,
) -> Option<(String, Option<SessionCookie>)> {
    let strategies: [&dyn AuthStrategy; 2] = [&CookieStrategy, &BasicAuthStrategy];

    for strategy in strategies {
        match strategy.attempt(authenticator, parts).await {
            StrategyOutcome::Granted { subject, cookie } => return Some((subject, cookie)),
            StrategyOutcome::NotApplicable => continue,
            StrategyOutcome::Denied => return None,
        }
    }

    None
}

/// Attaches a `Set-Cookie` header to the response when a strategy issued one.
pub(crate) fn apply_session_cookie(response: &mut Response, cookie: Option<SessionCookie>) {
    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie.header_value()) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "unrenderable session cookie dropped"),
        }
    }
}

/// API authentication layer: denial answers with `401` JSON.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    match run_strategies(&st.authenticator, &mut parts).await {
        Some((subject, cookie)) => {
            tracing::debug!(subject = %subject, "request authenticated");
            let req = Request::from_parts(parts, body);
            let mut response = next.run(req).await;
            apply_session_cookie(&mut response, cookie);
            Ok(response)
        }
        None => Err(AppError::unauthorized(
            "unauthorized",
            json!({ "reason": "no authentication strategy accepted the request" }),
        )),
    }
}

fn session_cookie_value(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut kv = cookie.trim().splitn(2, '=');
                match (kv.next(), kv.next()) {
                    (Some(COOKIE_NAME), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}
