//! DTO for the health endpoint.

use serde::Serialize;

/// Health report: the process answering at all is the signal.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
