mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use short_url::api::handlers::shorten_handler;
use short_url::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["short_id"].as_str().unwrap().len(), 7);
    assert!(json.get("short_url").is_none());
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_deduplication(pool: PgPool) {
    let server = server(common::create_test_state(pool.clone()));

    let first = server
        .post("/")
        .json(&json!({ "url": "https://dedup.com/page" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/")
        .json(&json!({ "url": "https://dedup.com/page" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_id"], second["short_id"]);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_deleted_url_returns_existing_id(pool: PgPool) {
    let deleted = common::create_deleted_url(&pool, "https://old.example.com").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://old.example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_id"], deleted.short_id);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_distinct_urls_get_distinct_ids(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let a = server
        .post("/")
        .json(&json!({ "url": "https://a.example.com" }))
        .await
        .json::<serde_json::Value>();

    let b = server
        .post("/")
        .json(&json!({ "url": "https://b.example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(a["short_id"], b["short_id"]);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: PgPool) {
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post("/")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_unsupported_scheme(pool: PgPool) {
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post("/")
        .json(&json!({ "url": "ftp://files.example.com/a.txt" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_field(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server.post("/").json(&json!({ "link": "x" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_renders_public_short_url(pool: PgPool) {
    let state = AppState::new(
        Arc::new(pool),
        false,
        Some("https://sho.rt/".to_string()),
    );
    let server = server(state);

    let json = server
        .post("/")
        .json(&json!({ "url": "https://example.com/long/path" }))
        .await
        .json::<serde_json::Value>();

    let short_id = json["short_id"].as_str().unwrap();
    assert_eq!(json["short_url"], format!("https://sho.rt/{short_id}"));
}

#[sqlx::test]
async fn test_shorten_rejects_embedded_control_characters(pool: PgPool) {
    let server = server(common::create_test_state(pool.clone()));

    for url in ["https://exa\tmple.com/a\nb", "https://example.com/a b"] {
        let response = server.post("/").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "validation_error"
        );
    }

    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_stores_non_ascii_url_encoded(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com/caf\u{e9}" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        response.json::<serde_json::Value>()["url"],
        "https://example.com/caf%C3%A9"
    );
}
