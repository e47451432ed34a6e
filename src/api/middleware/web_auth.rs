//! Dashboard authentication layer.
//!
//! Runs the same strategy chain as the API layer but answers denial with a
//! redirect to the login page — a browser should land on a form, not a JSON
//! error body.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::auth::{apply_session_cookie, run_strategies};
use crate::state::AppState;

pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let (mut parts, body) = req.into_parts();

    match run_strategies(&st.authenticator, &mut parts).await {
        Some((_, cookie)) => {
            let req = Request::from_parts(parts, body);
            let mut response = next.run(req).await;
            apply_session_cookie(&mut response, cookie);
            Ok(response)
        }
        None => Err(Redirect::to("/")),
    }
}
