//! Rejects requests originating from blocked subnets.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use ipnetwork::IpNetwork;
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::warn;

use crate::error::AppError;
use crate::utils::client_ip::resolve_client_ip;

/// Blocked subnets plus the address resolution policy.
#[derive(Debug, Clone, Default)]
pub struct SubnetFilter {
    blocked: Vec<IpNetwork>,
    behind_proxy: bool,
}

impl SubnetFilter {
    pub fn new(blocked: Vec<IpNetwork>, behind_proxy: bool) -> Self {
        Self {
            blocked,
            behind_proxy,
        }
    }

    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        self.blocked.iter().any(|network| network.contains(ip))
    }
}

/// Middleware that answers 403 when the client address is inside a blocked
/// subnet.
///
/// The address is resolved exactly as for access logs. Requests without a
/// resolvable address pass through.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(routes())
///     .layer(middleware::from_fn_with_state(filter, subnet_filter::layer));
/// ```
pub async fn layer(
    State(filter): State<Arc<SubnetFilter>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if filter.blocked.is_empty() {
        return Ok(next.run(request).await);
    }

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    if let Some(ip) = resolve_client_ip(request.headers(), peer, filter.behind_proxy)
        && filter.is_blocked(ip)
    {
        warn!(client = %ip, "Rejected request from blocked subnet");
        return Err(AppError::forbidden(
            "Access from this network is not allowed",
            json!({}),
        ));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(subnets: &[&str]) -> SubnetFilter {
        SubnetFilter::new(
            subnets.iter().map(|s| s.parse().unwrap()).collect(),
            false,
        )
    }

    #[test]
    fn test_address_inside_subnet_is_blocked() {
        let filter = filter(&["10.0.0.0/8", "2001:db8::/32"]);

        assert!(filter.is_blocked("10.1.2.3".parse().unwrap()));
        assert!(filter.is_blocked("2001:db8::1".parse().unwrap()));
    }

    #[test]
    fn test_address_outside_subnet_passes() {
        let filter = filter(&["10.0.0.0/8"]);

        assert!(!filter.is_blocked("192.168.0.1".parse().unwrap()));
        assert!(!filter.is_blocked("::1".parse().unwrap()));
    }

    #[test]
    fn test_empty_filter_blocks_nothing() {
        assert!(!SubnetFilter::default().is_blocked("127.0.0.1".parse().unwrap()));
    }
}
