use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use commitlog_api_server::ServeError;
use commitlog_core::{Log, RecordLog};

use crate::config::{ServeArgs, ServerConfig};
use crate::error::ServerError;

/// How long in-flight requests get after a shutdown signal.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn run(args: ServeArgs) -> Result<(), ServerError> {
    tracing::info!("commitlog-server starting");

    let config = ServerConfig::resolve(&args)?;

    // --- Log: one instance for the whole process, shared with the API ---
    let log = Arc::new(Log::new(config.log.clone()));
    tracing::info!(max_records = log.capacity(), "log created (in-memory, not persisted)");
    let log: Arc<dyn RecordLog> = log;

    // --- CancellationToken for graceful shutdown ---
    let token = CancellationToken::new();

    // --- API server ---
    let api_token = token.clone();
    let listen = config.listen.clone();
    let mut api_handle: JoinHandle<Result<(), ServeError>> = tokio::spawn(async move {
        commitlog_api_server::run(&listen, log, api_token).await
    });

    // --- Wait for a signal, or for the API to exit on its own (bind failure) ---
    tokio::select! {
        res = &mut api_handle => {
            res??;
            tracing::warn!("api server exited before shutdown signal");
            return Ok(());
        }
        res = shutdown_signal() => res?,
    }
    tracing::info!("shutting down...");

    token.cancel();

    match tokio::time::timeout(DRAIN_TIMEOUT, &mut api_handle).await {
        Ok(res) => res??,
        Err(_) => {
            tracing::warn!(timeout = ?DRAIN_TIMEOUT, "api server did not drain in time, aborting");
            api_handle.abort();
        }
    }

    tracing::info!("shutdown complete");
    Ok(())
}

/// SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res?;
                tracing::info!("SIGINT received");
            }
            _ = terminate.recv() => tracing::info!("SIGTERM received"),
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        tracing::info!("SIGINT received");
        Ok(())
    }
}
