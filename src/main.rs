use axum::serve;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use url_shortener::routes::create_router;
use url_shortener::shortener::UrlShortener;
use url_shortener::utils::get_env_or;

const DEFAULT_TRACING_LEVEL: &str = "url_shortener=debug,tower_http=debug";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_DOMAIN: &str = "http://localhost:8080";

#[tokio::main]
async fn main() {
    _ = dotenv();
    configure_tracing();
    let domain = get_env_or("DOMAIN", DEFAULT_DOMAIN);
    let port = get_env_or("PORT", DEFAULT_PORT);
    let shortener = Arc::new(UrlShortener::new(domain));
    let listener = create_listener(&format!("0.0.0.0:{}", port)).await;
    let router = create_router(shortener);
    serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server failed to start");
}

fn configure_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or(DEFAULT_TRACING_LEVEL.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn create_listener(server_address: &str) -> TcpListener {
    let listener = TcpListener::bind(&server_address)
        .await
        .expect("Creating tcp listener failed");
    tracing::info!("Listening on address: {}", server_address);
    listener
}
