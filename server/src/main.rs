mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if !config.site_dir.join("index.html").is_file() {
        tracing::warn!(
            site_dir = %config.site_dir.display(),
            "index.html not found; build the client with `trunk build` first"
        );
    }

    let app = routes::app(&config);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, site_dir = %config.site_dir.display(), "eco-server listening");
    axum::serve(listener, app).await.expect("server failed");
}
