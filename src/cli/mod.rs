use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use crate::auth::JwtIssuer;
use crate::config::{self, AppConfig};
use crate::database::{DatabaseManager, Stores};
use crate::router::{self, AppState};
use crate::services::Services;

#[derive(Parser)]
#[command(name = "quiz-api-rust")]
#[command(about = "Quiz API - forms, questions and pooled answers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on, overrides API_PORT")]
        port: Option<u16>,

        #[arg(long, help = "Do not apply pending migrations on startup")]
        skip_migrations: bool,
    },

    #[command(about = "Apply pending database migrations and exit")]
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::config();
    tracing::info!("Starting Quiz API in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve {
        port: None,
        skip_migrations: false,
    }) {
        Commands::Serve { port, skip_migrations } => serve(config, port, skip_migrations).await,
        Commands::Migrate => migrate(config).await,
    }
}

async fn migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::migrate(&pool).await?;
    pool.close().await;
    Ok(())
}

async fn serve(config: &AppConfig, port: Option<u16>, skip_migrations: bool) -> anyhow::Result<()> {
    config.validate().map_err(anyhow::Error::msg)?;
    if crate::is_development!() {
        tracing::warn!("Running with development defaults; set SECURITY_JWT_SECRET before deploying");
    }

    let pool = DatabaseManager::connect(&config.database).await?;
    if !skip_migrations {
        DatabaseManager::migrate(&pool).await?;
    }

    let services = Services::new(Stores::postgres(pool.clone()), JwtIssuer::from_config(&config.security));
    let state = AppState::new(services, config.api.max_page_limit, Some(pool.clone()));
    let app = router::app(state, config);

    let bind_addr = format!("0.0.0.0:{}", port.unwrap_or(config.api.port));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Quiz API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
