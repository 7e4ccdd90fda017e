use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use story_intake::config::{Config, StoreBackend};
use story_intake::store::{MemoryStore, NullStore, PgStore, SubmissionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting {}", config.service_name);

    let store: Arc<dyn SubmissionStore> = match config.store {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or("DATABASE_URL is required for the postgres store")?;

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations applied");

            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::None => {
            tracing::warn!("No store configured; submissions will only be logged");
            Arc::new(NullStore)
        }
    };

    tracing::info!(
        "Using {} store, retention {}s",
        store.backend(),
        config.retention_secs
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = story_intake::sweeper::spawn(
        store.clone(),
        Duration::from_secs(config.sweep_interval_secs.max(1)),
        shutdown_rx,
    );

    let addr = SocketAddr::new(config.host, config.port);
    let (app, _state) = story_intake::build_app(store, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    let _ = sweeper.await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
