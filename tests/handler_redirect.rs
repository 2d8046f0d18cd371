mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use short_url::api::handlers::redirect_handler;
use short_url::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{short_id}", get(redirect_handler))
        .layer(common::MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let url = common::create_test_url(&pool, "https://example.com/target").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server.get(&format!("/{}", url.short_id)).await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_records_access(pool: PgPool) {
    let url = common::create_test_url(&pool, "https://example.com/logged").await;
    let server = server(common::create_test_state(pool.clone()));

    server.get(&format!("/{}", url.short_id)).await;
    server.get(&format!("/{}", url.short_id)).await;

    assert_eq!(common::count_logs(&pool, url.id).await, 2);

    let client: String =
        sqlx::query_scalar("SELECT client_info FROM access_logs WHERE url_id = $1 LIMIT 1")
            .bind(url.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(client, common::TEST_CLIENT);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server.get("/AAAAAAA").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_malformed_id_not_found(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    server.get("/x").await.assert_status_not_found();
    server.get("/far-too-long-to-be-issued").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_deleted_is_gone(pool: PgPool) {
    let url = common::create_deleted_url(&pool, "https://example.com/gone").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server.get(&format!("/{}", url.short_id)).await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "gone");
    assert_eq!(common::count_logs(&pool, url.id).await, 0);
}

#[sqlx::test]
async fn test_redirect_behind_proxy_logs_forwarded_client(pool: PgPool) {
    let url = common::create_test_url(&pool, "https://example.com/proxied").await;
    let state = AppState::new(Arc::new(pool.clone()), true, None);
    let server = server(state);

    server
        .get(&format!("/{}", url.short_id))
        .add_header("X-Forwarded-For", "203.0.113.9, 10.0.0.1")
        .await;

    let client: String =
        sqlx::query_scalar("SELECT client_info FROM access_logs WHERE url_id = $1")
            .bind(url.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(client, "203.0.113.9");
}

#[sqlx::test]
async fn test_redirect_ignores_forwarded_header_without_proxy(pool: PgPool) {
    let url = common::create_test_url(&pool, "https://example.com/direct").await;
    let server = server(common::create_test_state(pool.clone()));

    server
        .get(&format!("/{}", url.short_id))
        .add_header("X-Forwarded-For", "203.0.113.9")
        .await;

    let client: String =
        sqlx::query_scalar("SELECT client_info FROM access_logs WHERE url_id = $1")
            .bind(url.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(client, common::TEST_CLIENT);
}

#[sqlx::test]
async fn test_redirect_unsendable_location_records_nothing(pool: PgPool) {
    let url = common::create_test_url(&pool, "https://example.com/a\nb").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server.get(&format!("/{}", url.short_id)).await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );
    assert_eq!(common::count_logs(&pool, url.id).await, 0);
}

#[sqlx::test]
async fn test_redirect_created_non_ascii_url(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let url = state
        .url_service
        .create_short_url("https://b\u{fc}cher.example/caf\u{e9}")
        .await
        .unwrap();
    let server = server(state);

    let response = server.get(&format!("/{}", url.short_id)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), url.original_url.as_str());
    assert!(url.original_url.is_ascii());
    assert_eq!(common::count_logs(&pool, url.id).await, 1);
}
