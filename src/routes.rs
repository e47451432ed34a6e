//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`     - Short link redirect (public)
//! - `GET  /health`     - Liveness check (public)
//! - `POST /login`      - Credential login, sets session cookie (public)
//! - `GET  /logout`     - Clears the session cookie (public)
//! - `/api/*`           - Link management (cookie or basic auth)
//! - `GET  /dashboard`  - Admin dashboard (auth, denial redirects to `/`)
//! - `GET  /`           - Login page
//! - `/static/*`        - Static assets
//!
//! The slug capture is registered last in spirit but axum gives literal
//! routes precedence, so `/health` and friends are never shadowed.

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api;
use crate::api::handlers::{health_handler, login_handler, logout_handler, redirect_handler};
use crate::api::middleware::{auth, tracing as tracing_mw, web_auth};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let dashboard = Router::new()
        .route_service("/dashboard", ServeFile::new("static/dashboard.html"))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ));

    let router = Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/login", post(login_handler))
        .route("/logout", get(logout_handler))
        .nest("/api", api_router)
        .merge(dashboard)
        .route_service("/", ServeFile::new("static/login.html"))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing_mw::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
