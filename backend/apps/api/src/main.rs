//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::PgAuthRepository;
use media::{LocalDiskStorage, PgVideoRepository};
use platform::mail::{HttpMailer, LogMailer};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppMailer, Services, build_router, with_http_layers};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,media=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Media buckets
    let storage = LocalDiskStorage::new(config.media_root.clone());
    storage.ensure_buckets().await?;
    tracing::info!(root = %storage.root().display(), "Media storage ready");

    let mailer = match &config.mail_relay_url {
        Some(url) => AppMailer::Relay(HttpMailer::new(url.clone(), config.smtp.clone())),
        None => {
            tracing::warn!("MAIL_RELAY_URL not set, account mails will only be logged");
            AppMailer::Log(LogMailer)
        }
    };

    let services = Services {
        users: Arc::new(PgAuthRepository::new(pool.clone())),
        videos: Arc::new(PgVideoRepository::new(pool.clone())),
        storage: Arc::new(storage),
        mailer: Arc::new(mailer),
        auth: Arc::new(config.auth_config()),
        media: Arc::new(config.media_config()),
    };

    // Build router
    let app = with_http_layers(
        build_router(services, Some(config.media_root.as_path())),
        &config.frontend_origins,
    );

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
