use tracing_subscriber::{EnvFilter, fmt};

use fsb_events::shell::config::AppConfig;
use fsb_events::shell::http::router;
use fsb_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory catalog for now
    let state = AppState::in_memory();
    let app = router(state);

    let addr = config.socket_addr();
    tracing::info!("FSB events endpoint: http://{}/fsbEvents", addr);
    tracing::info!("GraphQL endpoint: http://{}/graphql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
