//! Public base URL of the server as the requester sees it

use axum::http::HeaderMap;

const FORWARDED_PROTO_HEADER: &str = "X-Forwarded-Proto";
const FORWARDED_HOST_HEADER: &str = "X-Forwarded-Host";
const HOST_HEADER: &str = "Host";
const DEFAULT_SCHEME: &str = "http";
const FALLBACK_HOST: &str = "localhost";

/// `<scheme>://<host>` with proxy headers preferred and no trailing slash
pub fn base_url(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    let scheme = header(FORWARDED_PROTO_HEADER).unwrap_or(DEFAULT_SCHEME);
    let host = header(FORWARDED_HOST_HEADER)
        .or_else(|| header(HOST_HEADER))
        .unwrap_or(FALLBACK_HOST);

    format!("{scheme}://{host}").trim_end_matches('/').to_string()
}
