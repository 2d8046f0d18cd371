#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use short_url::api::middleware::subnet_filter::SubnetFilter;
use short_url::domain::entities::{NewShortUrl, ShortUrl};
use short_url::domain::repositories::UrlRepository;
use short_url::infrastructure::persistence::PgUrlRepository;
use short_url::routes::build_router;
use short_url::state::AppState;
use short_url::utils::short_id::encode_id;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_CLIENT: &str = "127.0.0.1";

/// Injects a fixed peer address, standing in for
/// `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
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
        let addr: SocketAddr = format!("{TEST_CLIENT}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), false, None)
}

/// Full application router with every route and middleware.
pub fn create_test_server(state: AppState, filter: SubnetFilter) -> TestServer {
    let app = build_router(state, Arc::new(filter)).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

/// Stores a URL record the same way the service does.
pub async fn create_test_url(pool: &PgPool, url: &str) -> ShortUrl {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    let id = repo.reserve_id().await.unwrap();

    repo.insert(NewShortUrl {
        id,
        original_url: url.to_string(),
        short_id: encode_id(id),
    })
    .await
    .unwrap()
    .unwrap()
}

pub async fn create_deleted_url(pool: &PgPool, url: &str) -> ShortUrl {
    let created = create_test_url(pool, url).await;

    sqlx::query("UPDATE urls SET is_active = FALSE WHERE id = $1")
        .bind(created.id)
        .execute(pool)
        .await
        .unwrap();

    created
}

pub async fn create_test_log(pool: &PgPool, url_id: i64, client_info: &str) {
    sqlx::query("INSERT INTO access_logs (url_id, client_info) VALUES ($1, $2)")
        .bind(url_id)
        .bind(client_info)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_logs(pool: &PgPool, url_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM access_logs WHERE url_id = $1")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn is_active(pool: &PgPool, short_id: &str) -> bool {
    sqlx::query_scalar("SELECT is_active FROM urls WHERE short_id = $1")
        .bind(short_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
