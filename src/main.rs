//! Personal Info Frontend host: server-renders the dashboard, serves its
//! assets and forwards `/svc/{service}/...` calls to the configured backends.

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let port = config.port;
    for (service, upstream) in config.configured() {
        tracing::info!(service = service.slug(), url = %upstream.url, token = upstream.token.is_some(), "upstream configured");
    }

    let state = state::AppState::new(config).expect("failed to build upstream HTTP client");
    let app = routes::app(state).expect("failed to assemble router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "personal-info-frontend listening");
    axum::serve(listener, app).await.expect("server failed");
}
