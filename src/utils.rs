use axum::http::HeaderMap;
use std::env;
use std::net::SocketAddr;

pub fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn get_header(name: &str, headers: &HeaderMap) -> Option<String> {
    headers
        .get(name)
        .map(|value| value.to_str().unwrap_or_default().to_string())
}

/// Derives the client identity: the first X-Forwarded-For entry when present,
/// else the transport peer address. The header is trusted unconditionally, so
/// this identity is trivially spoofable and is not a security boundary.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    if let Some(forwarded) = get_header("X-Forwarded-For", headers) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    peer.ip().to_string()
}
