use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;

use mergington::errors::{Report, WrapErr};
use mergington::log;

use crate::services::{ActivityServiceInMemory, seed};

mod config;
mod handlers;
mod routes;
mod services;

/// State shared by every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let args = config::Args::parse();

    // Seed the store
    let directory = match &args.seed_file {
        Some(path) => {
            log::info!("Loading activities from {}", path.display());
            seed::load_seed_file(path).await?
        }
        None => seed::default_activities(),
    };
    log::info!("Loaded {} activities", directory.len());

    let state = Arc::new(AppState::new(ActivityServiceInMemory::new(directory)));

    // Setup the routes
    let app = routes::setup_routes(state, &args.static_dir);

    // Setup the server
    let listener = TcpListener::bind(args.addr())
        .await
        .wrap_err_with(|| format!("Failed to bind {}", args.addr()))?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
