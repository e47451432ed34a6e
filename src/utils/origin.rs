//! Request origin and forwarded-TLS detection.
//!
//! The process never terminates TLS itself; a trusted reverse proxy reports
//! the external scheme through `X-Forwarded-Proto`.

use axum::http::{HeaderMap, header};

fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http")
}

/// Builds the externally visible origin (`scheme://host`) for a request.
///
/// Used to derive `short_url` values in API responses.
pub fn request_origin(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("{}://{}", request_scheme(headers), host)
}

/// Whether the inbound connection is encrypted from the client's view.
///
/// Controls the `Secure` attribute on session cookies; plaintext local
/// deployments must keep working, so this is never forced on.
pub fn connection_secure(headers: &HeaderMap) -> bool {
    request_scheme(headers).eq_ignore_ascii_case("https")
}
