mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment may be complete.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let identity = services::gotrue::GoTrueClient::new(&config.identity).expect("identity client init failed");
    tracing::info!(url = %config.identity.url, secure_cookies = config.cookie_secure, "identity provider configured");

    let state = state::AppState::new(Arc::new(identity), config.cookie_secure);
    let app = routes::app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bk-english listening");
    axum::serve(listener, app).await.expect("server failed");
}
