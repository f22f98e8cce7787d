//! Cata - inventory and booking catalogue
//!
//! Runs the administrative console on the terminal and the JSON web service
//! in the background. Typing `quit` stops both.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::sync::watch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cata::{
    api,
    bulletin::Bulletin,
    config::{AppConfig, LoggingConfig},
    console::{Console, Terminal},
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // The console owns the terminal, so logs go to a file
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Cata v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::connect(&config.database)
        .await
        .context("Failed to open database")?;
    repository.migrate().await.context("Failed to run database migrations")?;

    tracing::info!("Database ready at {}", config.database.url);

    let services = Services::new(config.catalogue.clone());
    let session = repository.session();
    let console_config = config.console.clone();
    let bulletin = Bulletin::with_message(&config.server.message);

    let state = AppState {
        config: Arc::new(config),
        repository,
        services: Arc::new(services.clone()),
        bulletin: bulletin.clone(),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let server = if state.config.server.enabled {
        let addr = SocketAddr::new(
            state.config.server.host.parse().context("Invalid host address")?,
            state.config.server.port,
        );
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Server listening on http://{}", addr);

        let app = api::create_router(state.clone());
        let mut shutdown_rx = shutdown_rx;
        Some(tokio::spawn(async move {
            let shutdown = async move {
                // A dropped sender also ends the wait
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
                tracing::info!("Web server shutting down");
            };
            if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown).await {
                tracing::error!("Web server stopped: {}", e);
            }
        }))
    } else {
        None
    };

    let mut console = Console::new(Terminal::stdio(), session, services, console_config)
        .with_bulletin(bulletin)
        .with_shutdown(shutdown_tx);
    console.run().await?;

    if let Some(server) = server {
        server.await.context("Web server task panicked")?;
    }

    tracing::info!("Stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> WorkerGuard {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("cata={},tower_http=debug", logging.level).into());

    let appender = tracing_appender::rolling::never(&logging.directory, &logging.file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
            .init();
    }

    guard
}
