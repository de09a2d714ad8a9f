//! Base URL reconstruction from HTTP request headers.

use axum::http::{HeaderMap, Uri, header};

/// Rebuilds the request's base URL (`<scheme>://<host>`).
///
/// The host is taken from the `Host` header when present, then from the
/// request target's authority (HTTP/2 carries it in `:authority` rather
/// than a `Host` header), then falls back to `localhost`. Any port is kept
/// so that generated resolution URLs stay reachable in local setups.
///
/// The scheme comes from `X-Forwarded-Proto` (reverse-proxy deployments)
/// only when it names a web scheme; anything else falls back to `http` so
/// an arbitrary header value never ends up inside a generated URL.
pub fn request_base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|proto| *proto == "http" || *proto == "https")
        .unwrap_or("http");

    format!("{}://{}", scheme, host)
}
