//! Authentication: credential verification, session-token lifecycle, and the
//! session cookie artifact.
//!
//! Request-level strategy dispatch lives in [`crate::api::middleware::auth`];
//! this module is HTTP-free apart from the rendered cookie string.

pub mod authenticator;
pub mod credentials;
pub mod token;

pub use authenticator::{Authenticator, COOKIE_NAME, SessionCookie};
pub use credentials::Credentials;
pub use token::{SessionClaims, TokenError, TokenService};
