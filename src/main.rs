mod config;
mod i18n;
mod pages;
mod routes;
mod services;
mod state;
mod ui;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    let worker = services::worker::WorkerClient::new(&config.worker).expect("worker client init failed");
    let port = config.port;
    let worker_url = worker.base_url().to_owned();
    let state = state::AppState::new(config, Arc::new(worker));
    tracing::info!(
        content_dir = %state.content.root().display(),
        worker = %worker_url,
        dev_bypass = state.config.worker.dev_bypass(),
        "configuration loaded"
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "nantoka listening");
    axum::serve(listener, app).await.expect("server failed");
}
