//! Application configuration loaded from environment variables.
//!
//! Configuration is built once at startup, validated, and passed down by
//! value — there is no global mutable configuration.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `DATABASE_PATH` - SQLite database file (default: `snip.db`)
//! - `ADMIN_CREDENTIALS` - `user:pass` pair for the administrator
//!   (default: `admin:admin`, with a loud warning)
//! - `TOKEN_SIGNING_SECRET` - HMAC key for session tokens (defaults to the
//!   credential string, with a loud warning)
//! - `RUST_LOG` - Log level/filter (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_BUSY_TIMEOUT_SECS` - SQLite busy timeout (default: 5)
//! - `SHUTDOWN_GRACE_SECS` - Drain window on shutdown (default: 10)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub database_path: String,
    pub admin_credentials: String,
    pub token_signing_secret: String,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
    pub db_busy_timeout_secs: u64,
    pub shutdown_grace_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "snip.db".to_string());

        let admin_credentials =
            env::var("ADMIN_CREDENTIALS").unwrap_or_else(|_| "admin:admin".to_string());

        let token_signing_secret =
            env::var("TOKEN_SIGNING_SECRET").unwrap_or_else(|_| admin_credentials.clone());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_busy_timeout_secs = env::var("DB_BUSY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let shutdown_grace_secs = env::var("SHUTDOWN_GRACE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            listen_addr,
            database_path,
            admin_credentials,
            token_signing_secret,
            log_level,
            log_format,
            db_max_connections,
            db_busy_timeout_secs,
            shutdown_grace_secs,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when any value cannot possibly work: a bind address
    /// without a port, an unknown log format, malformed credentials, an
    /// empty secret, or a zero-sized pool.
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.database_path.is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.admin_credentials.contains(':') {
            anyhow::bail!("ADMIN_CREDENTIALS must be in format 'user:pass'");
        }

        if self.token_signing_secret.is_empty() {
            anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints a configuration summary without sensitive data.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_path);
        tracing::info!(
            "  Admin user: {}",
            mask_credentials(&self.admin_credentials)
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }

    /// Warns when the deployment runs on insecure fallback values.
    pub fn warn_on_insecure_defaults(&self) {
        if self.admin_credentials == "admin:admin" {
            tracing::warn!(
                "using default admin credentials - set ADMIN_CREDENTIALS for production"
            );
        }
        if self.token_signing_secret == self.admin_credentials {
            tracing::warn!(
                "using ADMIN_CREDENTIALS as signing secret - set TOKEN_SIGNING_SECRET for production"
            );
        }
    }
}

/// Masks the password half of a `user:pass` string for logging.
fn mask_credentials(raw: &str) -> String {
    match raw.split_once(':') {
        Some((user, _)) => format!("{user}:***"),
        None => raw.to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects the environment to be populated already (e.g. via
/// `dotenvy::dotenv()` in `main`).
///
/// # Errors
///
/// Returns an error when validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
