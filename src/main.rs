use std::net::SocketAddr;
use std::sync::Arc;

use router_web_exporter::{
    AppError, AppState, Config, MetricsRegistry, Result, create_router, start_scrape_loop,
};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::load()?;
    tracing::info!("Scraping router at {}", config.router_base_url);
    tracing::info!("WebDriver endpoint: {}", config.webdriver_url);

    let metrics = MetricsRegistry::new();

    let state = Arc::new(AppState {
        config: config.clone(),
        metrics,
    });

    // Shutdown channel (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ctrl+C handling
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    // Scrape loop in the background; a fatal scrape error raises shutdown
    let scrape_handle = start_scrape_loop(shutdown_rx.clone(), shutdown_tx.clone(), state.clone());

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Router Web Exporter starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /health  - Health check");
    tracing::info!("  - GET /metrics - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown({
            let mut shutdown_rx = shutdown_rx.clone();
            async move {
                let _ = shutdown_rx.changed().await;
                tracing::info!("HTTP server shutting down");
            }
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    // Surface a scrape-loop failure as the process exit status (non-zero;
    // login verification failure included).
    match scrape_handle.await {
        Ok(result) => result,
        Err(join_err) => Err(AppError::Join(join_err.to_string())),
    }
}

fn setup_tracing() {
    // EnvFilter honors RUST_LOG; default to "info" when unset
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
