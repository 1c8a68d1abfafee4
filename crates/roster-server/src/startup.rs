//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____  ____  _____________________
   / __ \/ __ \/ ___/_  __/ ____/ __ \
  / /_/ / / / /\__ \ / / / __/ / /_/ /
 / _, _/ /_/ /___/ // / / /___/ _, _/
/_/ |_|\____//____//_/ /_____/_/ |_|
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:   http://0.0.0.0:{}/api/v1/employees", port);
    info!("Health:     http://0.0.0.0:{}/health", port);
    info!("Swagger UI: http://0.0.0.0:{}/swagger-ui", port);
    info!("{}", separator);
}
