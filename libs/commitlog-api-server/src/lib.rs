mod error;
mod http;
pub mod wire;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tokio_util::sync::CancellationToken;

use commitlog_core::RecordLog;

pub use error::{ApiError, ServeError};

#[derive(Clone)]
pub(crate) struct AppState {
    log: Arc<dyn RecordLog>,
}

/// Produce/consume router over a shared log.
///
/// - `POST /` — append `{"record":{"value":"<base64>"}}`, returns `{"offset":N}`
/// - `GET /`  — read `{"offset":N}`, returns `{"record":{...}}`
pub fn router(log: Arc<dyn RecordLog>) -> Router {
    let state = AppState { log };

    Router::new()
        .route("/", post(http::handle_produce).get(http::handle_consume))
        .with_state(state)
}

/// Bind `addr` and serve the log until `shutdown` is cancelled.
pub async fn run(
    addr: &str,
    log: Arc<dyn RecordLog>,
    shutdown: CancellationToken,
) -> Result<(), ServeError> {
    let app = router(log);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(ServeError::Serve)?;
    tracing::info!(addr = %local_addr, "api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(ServeError::Serve)?;

    tracing::info!("api stopped");
    Ok(())
}
