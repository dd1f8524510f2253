use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use commitlog_core::LogError;

/// Request-level failure, rendered as a plain-text body with a status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body could not be decoded (bad JSON, negative offset, bad base64).
    #[error("invalid request: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Log(#[from] LogError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Log(LogError::OffsetNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Log(LogError::CapacityExceeded { .. }) => StatusCode::INSUFFICIENT_STORAGE,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidArgument(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Log(LogError::OffsetNotFound { offset }) => {
                tracing::debug!(offset, "offset not found");
            }
            other => {
                tracing::warn!(status = status.as_u16(), error = %other, "request rejected");
            }
        }
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}
