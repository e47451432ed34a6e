mod common;

use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use tower::Layer;
use snip::api::handlers::redirect_handler;

/// Injects a fixed peer address so `ConnectInfo` resolves without a real
/// socket.
#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "192.0.2.10:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::test_state(pool);
    let app = Router::new()
        .route("/{slug}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_to_target_url() {
    let pool = common::setup_pool().await;
    common::create_test_link(&pool, "go0001", "https://example.com/target").await;

    let server = make_server(pool);
    let response = server.get("/go0001").await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let pool = common::setup_pool().await;
    let id = common::create_test_link(&pool, "go0002", "https://example.com").await;

    let server = make_server(pool.clone());
    assert_eq!(server.get("/go0002").await.status_code(), 308);
    server.get("/go0002").await;

    assert_eq!(common::count_clicks(&pool, id).await, 2);
}

#[tokio::test]
async fn test_redirect_records_forwarded_ip() {
    let pool = common::setup_pool().await;
    let id = common::create_test_link(&pool, "go0003", "https://example.com").await;

    let server = make_server(pool.clone());
    server
        .get("/go0003")
        .add_header("X-Forwarded-For", "203.0.113.5")
        .add_header("User-Agent", "Mozilla/5.0")
        .await;

    let (ip_address, user_agent): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT ip_address, user_agent FROM clicks WHERE link_id = ?1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(ip_address.as_deref(), Some("203.0.113.5"));
    assert_eq!(user_agent.as_deref(), Some("Mozilla/5.0"));
}

#[tokio::test]
async fn test_redirect_falls_back_to_peer_ip() {
    let pool = common::setup_pool().await;
    let id = common::create_test_link(&pool, "go0004", "https://example.com").await;

    let server = make_server(pool.clone());
    server.get("/go0004").await;

    let ip_address: Option<String> =
        sqlx::query_scalar("SELECT ip_address FROM clicks WHERE link_id = ?1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(ip_address.as_deref(), Some("192.0.2.10"));
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let pool = common::setup_pool().await;
    let server = make_server(pool.clone());

    let response = server.get("/ghost1").await;

    response.assert_status_not_found();
    // A failed resolution records nothing.
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 0);
}
