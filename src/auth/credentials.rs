//! Administrator credential pair.

use crate::error::AppError;
use serde_json::json;

/// A username/password pair.
///
/// The configured pair lives in memory for the lifetime of the process and
/// is never persisted; submitted pairs exist only for the duration of a
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Parses a `user:pass` string, splitting on the first separator so
    /// passwords may contain `:`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the separator is absent.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let (username, password) = raw.split_once(':').ok_or_else(|| {
            AppError::bad_request(
                "malformed credentials, expected user:pass",
                json!({}),
            )
        })?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Exact-match comparison of both fields.
    ///
    /// Plain equality, not a constant-time comparison.
    pub fn matches(&self, other: &Credentials) -> bool {
        self.username == other.username && self.password == other.password
    }
}
