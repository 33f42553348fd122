//! Session trace storage for tracemon
//!
//! This crate provides:
//! - the [`TraceStorage`] abstraction over session-keyed text blobs
//! - [`LocalTraceStorage`], one `<id>.txt` file per session in a flat directory
//! - the append separator used when extending a trace

pub mod storage;
pub mod trace;

pub use storage::{LocalTraceStorage, SessionId, StorageError, StorageResult, TraceStorage};
pub use trace::{TRACE_SEPARATOR, append_trace};
