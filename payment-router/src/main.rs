use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payment_router::config::ServerConfig;
use payment_router::feed;
use payment_router::normalize::Normalizer;
use payment_router::web::{AppState, create_router};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // An unreadable table degrades to "no routes" rather than refusing to start.
    let table = feed::load_or_empty(&config.table).await;
    info!(rows = table.len(), "routing table ready");

    let state = AppState::new(table, Normalizer::default(), config.validator);
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.addr, "payment router listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
