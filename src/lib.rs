//! Tracemon
//!
//! Submit execution traces to an external runtime monitor and receive
//! three-valued verdicts. This crate re-exports the workspace members:
//!
//! - [`config`], [`monitor`]: verdict interpretation, monitor invocation, configuration
//! - [`store`]: session trace storage
//! - [`server`]: HTTP service and CLI plumbing
//! - [`sdk`]: HTTP client

pub use tracemon_core::{config, error, monitor};
pub use tracemon_sdk as sdk;
pub use tracemon_server as server;
pub use tracemon_store as store;

pub use tracemon_core::{Monitor, MonitorResponse, Verdict, interpret};
pub use tracemon_sdk::TracemonClient;
pub use tracemon_store::{LocalTraceStorage, SessionId, TraceStorage};
