//! Client address extractor.
//!
//! Prefers the first entry of `X-Forwarded-For` (set by the reverse proxy) and
//! falls back to the peer address recorded by
//! `Router::into_make_service_with_connect_info::<SocketAddr>()`.

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Address of the client that sent the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

/// Rejection when neither a forwarded address nor a peer address is known.
#[derive(Debug, Clone, Copy)]
pub struct MissingClientAddress;

impl IntoResponse for MissingClientAddress {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "MISSING_CLIENT_ADDRESS",
            "message": "client address unavailable",
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = MissingClientAddress;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let ip = forwarded_for(parts).or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        });
        async move { ip.map(ClientIp).ok_or(MissingClientAddress) }
    }
}

/// First address in `X-Forwarded-For`, if it parses.
fn forwarded_for(parts: &Parts) -> Option<IpAddr> {
    let value = parts.headers.get(FORWARDED_FOR_HEADER)?.to_str().ok()?;
    value.split(',').next()?.trim().parse().ok()
}
