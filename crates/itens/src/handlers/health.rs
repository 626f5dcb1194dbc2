//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store probe (runs `SELECT 1`)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Checks that the store answers queries.
///
/// Returns 200 when it does, 503 with the error otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.item_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
