use axum::body::Body;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::client_info::ClientInfo;
use crate::errors::ShortenerError;
use crate::model::{HistoryItem, LinkStats, ShortenRequest, ShortenResponse};
use crate::shortener::UrlShortener;
use crate::utils::{client_ip, get_header};

pub fn create_router(shortener: Arc<UrlShortener>) -> Router {
    Router::new()
        .route("/shorten", post(create_link))
        .route("/history", get(get_history))
        .route("/stats/:code", get(get_link_statistics))
        .route("/:code", get(redirect).delete(delete_link))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(shortener)
}

pub async fn create_link(
    State(shortener): State<Arc<UrlShortener>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, ShortenerError> {
    let ip = client_ip(&headers, peer);
    let user_agent = get_header("User-Agent", &headers).unwrap_or_default();
    let client = ClientInfo::derive(&ip, &user_agent);
    let code = shortener.create_short_link(&request.url, client)?;
    tracing::debug!("shortened url for client {} to code {}", ip, code);
    Ok(Json(ShortenResponse {
        short_url: shortener.short_url(&code),
    }))
}

pub async fn redirect(
    State(shortener): State<Arc<UrlShortener>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ShortenerError> {
    let ip = client_ip(&headers, peer);
    let destination_url = shortener.redirect(&code, &ip)?;
    Ok(Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", destination_url)
        .body(Body::empty())
        .expect("Response build failed"))
}

pub async fn get_link_statistics(
    State(shortener): State<Arc<UrlShortener>>,
    Path(code): Path<String>,
) -> Result<Json<LinkStats>, ShortenerError> {
    Ok(Json(shortener.stats(&code)?))
}

pub async fn get_history(
    State(shortener): State<Arc<UrlShortener>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<Vec<HistoryItem>> {
    let ip = client_ip(&headers, peer);
    Json(shortener.history(&ip))
}

pub async fn delete_link(
    State(shortener): State<Arc<UrlShortener>>,
    Path(code): Path<String>,
) -> StatusCode {
    shortener.delete(&code);
    StatusCode::NO_CONTENT
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
