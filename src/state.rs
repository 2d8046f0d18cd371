//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{HealthService, UrlService, UsageService};
use crate::infrastructure::persistence::{
    PgAccessLogRepository, PgHealthRepository, PgUrlRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<PgUrlRepository, PgAccessLogRepository>>,
    pub usage_service: Arc<UsageService<PgUrlRepository, PgAccessLogRepository>>,
    pub health_service: Arc<HealthService<PgHealthRepository>>,
    /// Trust `X-Forwarded-For` / `X-Real-IP` when resolving the client address.
    pub behind_proxy: bool,
    /// Base used to render `short_url` in create responses.
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Wires the PostgreSQL repositories and services over a shared pool.
    pub fn new(pool: Arc<PgPool>, behind_proxy: bool, public_base_url: Option<String>) -> Self {
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
        let access_log_repository = Arc::new(PgAccessLogRepository::new(pool.clone()));
        let health_repository = Arc::new(PgHealthRepository::new(pool));

        Self {
            url_service: Arc::new(UrlService::new(
                url_repository.clone(),
                access_log_repository.clone(),
            )),
            usage_service: Arc::new(UsageService::new(url_repository, access_log_repository)),
            health_service: Arc::new(HealthService::new(health_repository)),
            behind_proxy,
            public_base_url,
        }
    }
}
