//! # Roster Server
//!
//! Main entry point for the Roster application: loads configuration,
//! wires the data provider into the mapping service, and serves the REST
//! API until interrupted.

use roster_config::{AppConfig, ConfigLoader, LoggingConfig};
use roster_core::{RosterError, RosterResult};
use roster_repository::InMemoryEmployeeRepository;
use roster_rest::{create_router, AppState};
use roster_service::{EmployeeService, EmployeeServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            // Logging is not up yet when configuration fails to load.
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let config = config_loader.get().await;

    init_logging(&config.logging);

    info!("Starting Roster Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> RosterResult<()> {
    startup::print_banner();

    // Repository and service are immutable; build the chain once and
    // share it across requests.
    let employee_repository = Arc::new(InMemoryEmployeeRepository::seeded());
    let employee_service: Arc<dyn EmployeeService> =
        Arc::new(EmployeeServiceImpl::new(employee_repository));

    let state = AppState::new(employee_service);
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    startup::print_startup_info(config.server.port);
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RosterError::internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install SIGINT handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}
