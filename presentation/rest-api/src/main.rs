use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{
    alert_scheduler::AlertScheduler, dependency_injection::DependencyContainer, server::Server,
};

/// REST API Entry Point
///
/// Loads configuration, wires the stores, notifier and use cases, starts the
/// periodic alert check and serves the HTTP API.
/// - config/: Environment driven configuration (server, CORS, storage, notifier, alerts)
/// - setup/: Dependency injection, alert scheduler and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.storage, &config.notifier).await?;

    // 5. Start periodic alert check
    match config.alerts.check_interval {
        Some(period) => {
            AlertScheduler::new(container.check_alerts_use_case.clone(), period).spawn();
        }
        None => tracing::info!("Periodic alert check disabled"),
    }

    // 6. Run server
    Server::run(
        &config.server,
        config.cors,
        (container.health_api, container.item_api, container.alert_api),
    )
    .await?;

    Ok(())
}
