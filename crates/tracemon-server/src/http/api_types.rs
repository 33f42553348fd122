//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use tracemon_store::SessionId;

/// `POST /sessions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub id: SessionId,
}

/// `GET /sessions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionId>,
}

/// `GET /traces/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceContentResponse {
    pub content: String,
}

/// `POST /traces/{id}/append`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendTraceResponse {
    /// Full trace after the append
    pub body: String,
    /// Session id as given in the path
    pub session_id: String,
}

/// `POST /traces/{id}/overwrite`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverwriteTraceResponse {
    pub body: String,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
