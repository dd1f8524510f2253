use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::AppState;
use crate::error::ApiError;
use crate::wire::{ConsumeRequest, ConsumeResponse, ProduceRequest, ProduceResponse};

// Bodies are decoded by hand rather than through the `Json` extractor so that
// every decode failure is a 400 and a missing Content-Type is accepted.

// ═══════════════════════════════════════════════════════════════
//  POST /  — append a record
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_produce(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProduceResponse>, ApiError> {
    let req: ProduceRequest = serde_json::from_slice(&body)?;
    let bytes = req.record.value.len();

    let offset = state.log.append(req.record.into())?;
    tracing::debug!(offset, bytes, "record appended");

    Ok(Json(ProduceResponse { offset }))
}

// ═══════════════════════════════════════════════════════════════
//  GET /  — read a record by offset
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_consume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConsumeResponse>, ApiError> {
    let req: ConsumeRequest = serde_json::from_slice(&body)?;

    let record = state.log.read(req.offset)?;
    tracing::debug!(offset = record.offset, bytes = record.len(), "record read");

    Ok(Json(ConsumeResponse {
        record: record.into(),
    }))
}
