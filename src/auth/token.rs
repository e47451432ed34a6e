//! Session token signing and verification.
//!
//! Tokens are `base64url(claims JSON) "." hex(HMAC-SHA256(secret, payload))`.
//! The service trusts the signature, not the client: claims are only decoded
//! after the MAC over the payload has been verified, so a tampered token
//! reports [`TokenError::InvalidSignature`] regardless of its contents.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Session lifetime in seconds (30 days); also the sliding-expiration window.
pub const TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Session lifetime as a [`Duration`].
pub fn token_ttl() -> Duration {
    Duration::seconds(TOKEN_TTL_SECS)
}

/// Claims carried inside a signed session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Issued-at (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration (UTC Unix timestamp).
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// Signs and verifies time-bounded session tokens.
///
/// Pure: output depends only on the input, the current time, and the shared
/// secret. No state, no I/O.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Signs a token for `subject` valid for [`token_ttl`] from now.
    pub fn sign(&self, subject: &str) -> String {
        self.sign_with_expiry(subject, token_ttl())
    }

    /// Signs a token for `subject` expiring `ttl` from now.
    ///
    /// Exposed so expiry behavior can be exercised without a clock source.
    pub fn sign_with_expiry(&self, subject: &str, ttl: Duration) -> String {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let payload_json =
            serde_json::to_string(&claims).expect("claims are always serializable");
        let payload = URL_SAFE_NO_PAD.encode(payload_json);
        let signature = hex::encode(self.mac(&payload).finalize().into_bytes());

        format!("{payload}.{signature}")
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] when the token structure or payload cannot
    ///   be decoded
    /// - [`TokenError::InvalidSignature`] when the MAC does not match (wrong
    ///   secret or tampering)
    /// - [`TokenError::Expired`] when the signature is valid but `exp` has
    ///   passed
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let (payload, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;

        let signature_bytes =
            hex::decode(signature).map_err(|_| TokenError::InvalidSignature)?;
        self.mac(payload)
            .verify_slice(&signature_bytes)
            .map_err(|_| TokenError::InvalidSignature)?;

        let payload_json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload_json).map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac
    }
}
