mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use snip::api::handlers::{create_link_handler, delete_link_handler, list_links_handler};

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::test_state(pool);
    let app = Router::new()
        .route("/api/links", get(list_links_handler).post(create_link_handler))
        .route("/api/links/{id}", delete(delete_link_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_with_explicit_slug() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/page", "slug": "mylink" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["link"]["slug"], "mylink");
    assert_eq!(body["link"]["url"], "https://example.com/page");
    assert_eq!(body["link"]["short_url"], "http://s.example.com/mylink");
    assert!(body["link"]["id"].as_i64().unwrap() > 0);
    // A new link has no stats to report.
    assert!(body["link"].get("stats").is_none());
}

#[tokio::test]
async fn test_create_link_generates_slug() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let slug = body["link"]["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 6);
}

#[tokio::test]
async fn test_create_link_duplicate_slug_conflicts() {
    let pool = common::setup_pool().await;
    common::create_test_link(&pool, "abc123", "https://first.example").await;

    let server = make_server(pool);
    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://second.example", "slug": "abc123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_link_rejects_missing_or_invalid_url() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    let invalid = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "not a url" }))
        .await;
    invalid.assert_status_bad_request();

    // Missing `url` fails deserialization before the handler runs.
    let missing = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "slug": "mylink" }))
        .await;
    assert!(missing.status_code().is_client_error());
}

#[tokio::test]
async fn test_create_link_rejects_malformed_slug() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    for bad in ["abc", "has space", "dashboard"] {
        let response = server
            .post("/api/links")
            .add_header("Host", "s.example.com")
            .json(&json!({ "url": "https://example.com", "slug": bad }))
            .await;
        response.assert_status_bad_request();
    }
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_newest_first_with_stats() {
    let pool = common::setup_pool().await;
    let older = common::create_test_link(&pool, "older1", "https://a.example").await;
    let newer = common::create_test_link(&pool, "newer1", "https://b.example").await;
    assert!(newer > older);

    let t_latest = "2024-01-03T09:15:00.000000Z";
    common::create_test_click(&pool, older, "2024-01-02T10:00:00.000000Z", "203.0.113.5").await;
    common::create_test_click(&pool, older, t_latest, "203.0.113.5").await;

    let server = make_server(pool);
    let response = server
        .get("/api/links")
        .add_header("Host", "s.example.com")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let links = body["links"].as_array().unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["slug"], "newer1");
    assert_eq!(links[1]["slug"], "older1");

    assert_eq!(links[0]["stats"]["clicks"], 0);
    assert!(links[0]["stats"]["last_clicked_at"].is_null());

    assert_eq!(links[1]["stats"]["clicks"], 2);
    let last = links[1]["stats"]["last_clicked_at"].as_str().unwrap();
    assert!(last.starts_with("2024-01-03T09:15:00"));
}

#[tokio::test]
async fn test_list_links_empty() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    let response = server
        .get("/api/links")
        .add_header("Host", "s.example.com")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["links"].as_array().unwrap().len(), 0);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let pool = common::setup_pool().await;
    let id = common::create_test_link(&pool, "del001", "https://example.com").await;

    let server = make_server(pool);
    let response = server.delete(&format!("/api/links/{id}")).await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_missing_link_is_not_found() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    let response = server.delete("/api/links/42").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_removes_click_records() {
    let pool = common::setup_pool().await;
    let id = common::create_test_link(&pool, "del002", "https://example.com").await;
    common::create_test_click(&pool, id, "2024-01-02T10:00:00.000000Z", "203.0.113.5").await;

    let server = make_server(pool.clone());
    server
        .delete(&format!("/api/links/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    assert_eq!(common::count_clicks(&pool, id).await, 0);
}

#[tokio::test]
async fn test_delete_with_non_integer_id_is_client_error() {
    let pool = common::setup_pool().await;
    let server = make_server(pool);

    let response = server.delete("/api/links/not-a-number").await;

    assert!(response.status_code().is_client_error());
}
