#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use snip::prelude::*;

pub const TEST_ADMIN: &str = "admin:secret";
pub const TEST_SECRET: &str = "test-signing-secret";

/// Opens an isolated in-memory database with migrations applied.
///
/// A single connection that never idles out: `:memory:` databases live and
/// die with their connection.
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

/// Builds application state over the given pool with test credentials.
pub fn test_state(pool: SqlitePool) -> AppState {
    use snip::domain::repositories::{ClickRepository, LinkRepository};
    use snip::infrastructure::persistence::{SqliteClickRepository, SqliteLinkRepository};

    let link_repository: Arc<dyn LinkRepository> =
        Arc::new(SqliteLinkRepository::new(pool.clone()));
    let click_repository: Arc<dyn ClickRepository> = Arc::new(SqliteClickRepository::new(pool));

    AppState {
        link_service: Arc::new(LinkService::new(link_repository, click_repository.clone())),
        click_service: Arc::new(ClickService::new(click_repository)),
        authenticator: Arc::new(Authenticator::new(
            Credentials::parse(TEST_ADMIN).unwrap(),
            TokenService::new(TEST_SECRET),
        )),
    }
}

pub async fn create_test_link(pool: &SqlitePool, slug: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO links (slug, url, created_at) VALUES (?1, ?2, ?3)")
        .bind(slug)
        .bind(url)
        .bind("2024-01-01T00:00:00.000000Z")
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn create_test_click(pool: &SqlitePool, link_id: i64, clicked_at: &str, ip: &str) {
    sqlx::query(
        "INSERT INTO clicks (link_id, clicked_at, user_agent, ip_address) \
         VALUES (?1, ?2, 'test-agent', ?3)",
    )
    .bind(link_id)
    .bind(clicked_at)
    .bind(ip)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_clicks(pool: &SqlitePool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE link_id = ?1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// `Authorization: Basic` header value for the given pair.
pub fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}
