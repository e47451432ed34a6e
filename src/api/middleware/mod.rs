//! HTTP middleware: authentication and observability.

pub mod auth;
pub mod tracing;
pub mod web_auth;
