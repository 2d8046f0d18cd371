mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use short_url::api::handlers::ping_handler;
use sqlx::PgPool;

#[sqlx::test]
async fn test_ping_available(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/ping", get(ping_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    let response = server.get("/ping").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "available");
    assert!(json["time"].is_string());
    assert!(json.get("error").is_none());
}

#[sqlx::test]
async fn test_ping_unavailable_when_pool_closed(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/ping", get(ping_handler))
        .with_state(state);

    pool.close().await;

    let server = TestServer::new(app).unwrap();
    let response = server.get("/ping").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["error"], "connection_error");
    assert!(json["detail"].is_string());
    assert!(json.get("time").is_none());
}
