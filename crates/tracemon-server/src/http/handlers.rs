//! Endpoint handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracemon_core::MonitorResponse;
use tracemon_store::SessionId;
use tracing::{error, info};

use super::AppState;
use super::api_types::{
    AppendTraceResponse, CreateSessionResponse, OverwriteTraceResponse, SessionListResponse,
    TraceContentResponse,
};
use super::error::ApiError;

type AppStateRef = State<Arc<AppState>>;

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn create_session(
    State(state): AppStateRef,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let id = state.storage.create().await?;
    info!(session = id, "session created");
    Ok(Json(CreateSessionResponse { id }))
}

pub async fn delete_session(
    State(state): AppStateRef,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete(id).await?;
    info!(session = id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Listing failures are reported as an empty list
pub async fn list_sessions(State(state): AppStateRef) -> Json<SessionListResponse> {
    let sessions = state.storage.list_ids().await.unwrap_or_else(|e| {
        error!(error = %e, "failed to list sessions");
        Vec::new()
    });
    Json(SessionListResponse { sessions })
}

/// Read failures are reported as an empty trace
pub async fn read_trace(
    State(state): AppStateRef,
    Path(id): Path<SessionId>,
) -> Json<TraceContentResponse> {
    let content = state.storage.read(id).await.unwrap_or_else(|e| {
        error!(session = id, error = %e, "error reading trace");
        String::new()
    });
    Json(TraceContentResponse { content })
}

pub async fn append_trace(
    State(state): AppStateRef,
    Path(id): Path<SessionId>,
    body: String,
) -> Result<Json<AppendTraceResponse>, ApiError> {
    let body = state.storage.append(id, &body).await?;
    Ok(Json(AppendTraceResponse {
        body,
        session_id: id.to_string(),
    }))
}

pub async fn overwrite_trace(
    State(state): AppStateRef,
    Path(id): Path<SessionId>,
    body: String,
) -> Result<Json<OverwriteTraceResponse>, ApiError> {
    state.storage.overwrite(id, &body).await?;
    Ok(Json(OverwriteTraceResponse { body }))
}

/// Always answers with a verdict; monitor failures are folded into it
pub async fn monitor_verdict(
    State(state): AppStateRef,
    Path(id): Path<SessionId>,
) -> Json<MonitorResponse> {
    let trace = state.storage.trace_path(id);
    Json(state.monitor.execute(&trace).await)
}
