//! Custom request extractors.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;

/// Recorded when a request carries no resolvable client address.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Originating client address of a request.
///
/// Reads the peer address from [`ConnectInfo`] and, when the service runs
/// behind a proxy, prefers the forwarding headers. Never rejects.
#[derive(Debug, Clone, Copy)]
pub struct ClientAddr(pub Option<IpAddr>);

impl ClientAddr {
    /// Textual form stored in access logs.
    pub fn client_info(&self) -> String {
        self.0
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
    }
}

impl FromRequestParts<AppState> for ClientAddr {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(resolve_client_ip(
            &parts.headers,
            peer,
            state.behind_proxy,
        )))
    }
}
