//! Slug generation and validation.
//!
//! Generated slugs are short random identifiers drawn from an alphabet that
//! excludes the visually confusable `i` and `l`. Custom slugs are validated
//! for length, character set, and reserved route words.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Alphabet for generated slugs: lowercase letters and digits, minus `i`/`l`.
const SLUG_ALPHABET: &[u8] = b"abcdefghjkmnopqrstuvwxyz0123456789";

/// Length of generated slugs.
const SLUG_LENGTH: usize = 6;

/// Minimum length for user-provided slugs.
const MIN_CUSTOM_LENGTH: usize = 5;

/// Slugs that would shadow fixed routes.
const RESERVED_SLUGS: &[&str] = &["api", "static", "health", "login", "logout", "dashboard"];

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+$").expect("slug pattern is valid")
});

/// Generates a random slug.
pub fn generate_slug() -> String {
    let mut rng = rand::rng();
    (0..SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom slug.
///
/// # Rules
///
/// - at least 5 characters
/// - letters, digits, hyphens, and underscores only
/// - not a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] when any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < MIN_CUSTOM_LENGTH {
        return Err(AppError::bad_request(
            format!("slug must be at least {MIN_CUSTOM_LENGTH} characters long"),
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "slug must contain only letters, numbers, hyphens, and underscores",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(
            "this slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}
