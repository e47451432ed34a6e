//! HTTP server initialization and runtime setup.
//!
//! Opens the SQLite pool, applies migrations, assembles the application
//! state, and runs the Axum server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::signal;
use tokio::sync::oneshot;

use crate::application::services::{ClickService, LinkService};
use crate::auth::{Authenticator, Credentials, TokenService};
use crate::config::Config;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::infrastructure::persistence::{SqliteClickRepository, SqliteLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error when the database cannot be opened or migrated, the
/// configured credentials are malformed, the bind fails, or the server
/// errors at runtime.
pub async fn run(config: Config) -> Result<()> {
    config.warn_on_insecure_defaults();

    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let state = build_state(&config, pool.clone())?;
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    // The oneshot fires when the shutdown signal arrives, before axum starts
    // draining; from that point in-flight requests get a bounded grace
    // period, after which they are abandoned and the pool is force-closed.
    let (signal_tx, signal_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signal_tx.send(());
        })
        .await
    });

    match signal_rx.await {
        Ok(()) => {
            tracing::info!("shutdown signal received, draining in-flight requests");
            let grace = Duration::from_secs(config.shutdown_grace_secs);
            match tokio::time::timeout(grace, &mut server).await {
                Ok(finished) => finished??,
                Err(_) => {
                    tracing::warn!("grace period elapsed, abandoning in-flight requests");
                    server.abort();
                }
            }
        }
        // The serve future ended before any signal: surface its error.
        Err(_) => server.await??,
    }

    pool.close().await;
    tracing::info!("server stopped");

    Ok(())
}

/// Opens the SQLite pool in WAL mode with a bounded busy timeout.
///
/// Concurrent writers block briefly instead of failing immediately; foreign
/// keys stay on so link deletion cascades into the click ledger.
async fn connect_pool(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout_secs))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Assembles the application state from an explicitly constructed pool.
pub fn build_state(config: &Config, pool: SqlitePool) -> Result<AppState> {
    let admin = Credentials::parse(&config.admin_credentials)?;
    let authenticator = Arc::new(Authenticator::new(
        admin,
        TokenService::new(config.token_signing_secret.clone()),
    ));

    let link_repository: Arc<dyn LinkRepository> = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let click_repository: Arc<dyn ClickRepository> = Arc::new(SqliteClickRepository::new(pool));

    Ok(AppState {
        link_service: Arc::new(LinkService::new(
            link_repository,
            click_repository.clone(),
        )),
        click_service: Arc::new(ClickService::new(click_repository)),
        authenticator,
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
