//! Trace storage abstraction and implementations
//!
//! Provides trait-based storage for session traces with a local
//! filesystem implementation.

mod local;

pub use local::LocalTraceStorage;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Numeric session identifier, also the trace file stem
pub type SessionId = u64;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("No session ids left after {0}")]
    IdsExhausted(SessionId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Session-keyed trace blobs
#[async_trait]
pub trait TraceStorage: Send + Sync {
    /// Allocate a new session with an empty trace
    async fn create(&self) -> StorageResult<SessionId>;

    /// Current trace text; a session without a trace reads as empty
    async fn read(&self, id: SessionId) -> StorageResult<String>;

    /// Append `text` after the trace separator and return the new trace
    async fn append(&self, id: SessionId, text: &str) -> StorageResult<String>;

    /// Replace the whole trace
    async fn overwrite(&self, id: SessionId, content: &str) -> StorageResult<()>;

    /// Remove the session and its trace
    async fn delete(&self, id: SessionId) -> StorageResult<()>;

    /// All known session ids, ascending
    async fn list_ids(&self) -> StorageResult<Vec<SessionId>>;

    /// Filesystem location of the trace, as handed to the monitor
    fn trace_path(&self, id: SessionId) -> PathBuf;
}
