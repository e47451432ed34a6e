//! # snip
//!
//! A self-hosted link shortener with click analytics, built with Axum and
//! SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories
//! - **Auth** ([`auth`]) - Credentials, session tokens, cookie artifacts
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Slug-to-URL redirects with an append-only click ledger
//! - Session cookies with sliding 30-day expiration
//! - Strategy-chain request authentication (cookie, then basic auth)
//! - Single-file embedded storage (WAL, cascading deletes)
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_CREDENTIALS="admin:change-me"
//! export TOKEN_SIGNING_SECRET="long-random-string"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for the full list.

pub mod api;
pub mod application;
pub mod auth;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickService, LinkService};
    pub use crate::auth::{Authenticator, Credentials, SessionCookie, TokenService};
    pub use crate::domain::entities::{Link, LinkStats, NewClick, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
