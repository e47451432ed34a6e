//! Handler for the health endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always `200` while the process is serving; there are no degraded states
/// to report — the embedded store shares the process's fate.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
