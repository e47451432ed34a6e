//! Credential-to-session exchange and session validation.

use serde_json::json;

use crate::auth::credentials::Credentials;
use crate::auth::token::{TOKEN_TTL_SECS, TokenError, TokenService};
use crate::error::AppError;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "auth_token";

/// A cookie-shaped session artifact.
///
/// Rendered manually into a `Set-Cookie` value; attributes are fixed apart
/// from `Secure`, which mirrors the inbound connection's encryption so that
/// plaintext local deployments keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    value: String,
    max_age: i64,
    secure: bool,
}

impl SessionCookie {
    fn new(token: String, secure: bool) -> Self {
        Self {
            value: token,
            max_age: TOKEN_TTL_SECS,
            secure,
        }
    }

    /// The clearing artifact used by logout.
    pub fn expired() -> Self {
        Self {
            value: String::new(),
            max_age: 0,
            secure: false,
        }
    }

    /// The raw signed token (empty for the clearing artifact).
    pub fn token(&self) -> &str {
        &self.value
    }

    /// Renders the `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        let mut rendered = format!(
            "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.value, self.max_age
        );
        if self.secure {
            rendered.push_str("; Secure");
        }
        rendered
    }
}

/// Exchanges credentials for sessions and validates sessions back into
/// identities.
pub struct Authenticator {
    admin: Credentials,
    tokens: TokenService,
}

impl Authenticator {
    pub fn new(admin: Credentials, tokens: TokenService) -> Self {
        Self { admin, tokens }
    }

    /// Verifies `submitted` against the configured administrator pair and, on
    /// success, issues a session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any mismatch. The error does not
    /// reveal which field was wrong.
    pub fn authenticate(
        &self,
        submitted: &Credentials,
        secure: bool,
    ) -> Result<SessionCookie, AppError> {
        if !self.admin.matches(submitted) {
            return Err(AppError::unauthorized(
                "invalid credentials",
                json!({}),
            ));
        }

        Ok(SessionCookie::new(
            self.tokens.sign(&submitted.username),
            secure,
        ))
    }

    /// Validates a session token and re-issues it with a renewed window.
    ///
    /// Sliding expiration: every valid request extends the session by the
    /// full TTL, so an active session never lapses while an abandoned one
    /// expires 30 days after its last use.
    ///
    /// # Errors
    ///
    /// Propagates the [`TokenError`] unchanged; no refresh happens on
    /// failure.
    pub fn validate_and_refresh(
        &self,
        token: &str,
        secure: bool,
    ) -> Result<(String, SessionCookie), TokenError> {
        let claims = self.tokens.verify(token)?;
        let fresh = SessionCookie::new(self.tokens.sign(&claims.sub), secure);
        Ok((claims.sub, fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            Credentials::parse("admin:secret").unwrap(),
            TokenService::new("test-secret"),
        )
    }

    fn creds(raw: &str) -> Credentials {
        Credentials::parse(raw).unwrap()
    }

    #[test]
    fn test_authenticate_then_validate_round_trip() {
        let auth = authenticator();

        let cookie = auth.authenticate(&creds("admin:secret"), false).unwrap();
        let (subject, refreshed) = auth.validate_and_refresh(cookie.token(), false).unwrap();

        assert_eq!(subject, "admin");
        assert!(!refreshed.token().is_empty());
    }

    #[test]
    fn test_authenticate_rejects_either_field() {
        let auth = authenticator();

        let wrong_pass = auth.authenticate(&creds("admin:wrong"), false).unwrap_err();
        let wrong_user = auth.authenticate(&creds("other:secret"), false).unwrap_err();

        // Identical externally visible errors; no username enumeration.
        assert_eq!(wrong_pass.to_string(), wrong_user.to_string());
    }

    #[test]
    fn test_validate_propagates_expiry_without_refresh() {
        let tokens = TokenService::new("test-secret");
        let auth = Authenticator::new(creds("admin:secret"), tokens.clone());

        let stale = tokens.sign_with_expiry("admin", Duration::seconds(-5));
        let err = auth.validate_and_refresh(&stale, false).unwrap_err();

        assert_eq!(err, TokenError::Expired);
    }

    #[test]
    fn test_cookie_attributes() {
        let auth = authenticator();

        let plain = auth.authenticate(&creds("admin:secret"), false).unwrap();
        let rendered = plain.header_value();
        assert!(rendered.starts_with("auth_token="));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Max-Age=2592000"));
        assert!(!rendered.contains("Secure"));

        let tls = auth.authenticate(&creds("admin:secret"), true).unwrap();
        assert!(tls.header_value().contains("Secure"));
    }

    #[test]
    fn test_expired_cookie_clears_value() {
        let rendered = SessionCookie::expired().header_value();
        assert!(rendered.starts_with("auth_token=;"));
        assert!(rendered.contains("Max-Age=0"));
    }
}
