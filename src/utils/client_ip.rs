//! Client IP extraction for click recording.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Headers consulted before falling back to the peer address, in order.
const FORWARDING_HEADERS: &[&str] = &["x-forwarded-for", "x-real-ip"];

/// Determines the client IP for a request.
///
/// Prefers `X-Forwarded-For`, then `X-Real-IP`; the first header whose value
/// parses as an IP address wins. Otherwise the raw peer address is used.
pub fn extract_client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    for name in FORWARDING_HEADERS {
        if let Some(candidate) = headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            && candidate.parse::<IpAddr>().is_ok()
        {
            return candidate.to_string();
        }
    }

    peer.ip().to_string()
}
