use db_helpers::{config::Config, handlers, state::AppState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path =
        std::env::var("DB_HELPERS_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let cfg = Config::from_file(&config_path)?;

    let state = Arc::new(AppState::from_config(&cfg));
    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = cfg.listen().parse()?;
    info!(%addr, "Starting db-helpers");

    let server = axum::Server::bind(&addr).serve(app.into_make_service());

    let graceful = server.with_graceful_shutdown(shutdown_signal());
    graceful.await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
