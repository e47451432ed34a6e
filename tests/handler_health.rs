use axum::{Router, routing::get};
use axum_test::TestServer;
use snip::api::handlers::health_handler;

#[tokio::test]
async fn test_health_always_ok() {
    let app = Router::new().route("/health", get(health_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
