//! Client address headers for tests that exercise per-client behaviour.

use axum::http::{HeaderName, HeaderValue};

use cinema_core::client_ip::FORWARDED_FOR_HEADER;

/// `X-Forwarded-For` header naming `ip` as the originating client.
pub fn forwarded_for(ip: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(FORWARDED_FOR_HEADER),
        HeaderValue::from_str(ip).unwrap(),
    )
}
