//! Tracemon core library
//!
//! This crate holds the decision logic of the tracemon service:
//! - running the external runtime monitor against a trace file
//! - classifying the monitor's textual output into a three-valued verdict
//! - folding monitor failures into a definite negative response
//!
//! Trace persistence lives in `tracemon-store`, the HTTP surface in
//! `tracemon-server`.

pub mod config;
pub mod error;
pub mod monitor;

pub use config::{Config, LoggingConfig, MonitorConfig, ServerConfig, StorageConfig};
pub use error::{TracemonError, TracemonResult};
pub use monitor::{
    Invocation, InvocationOptions, Monitor, MonitorError, MonitorInvoker, MonitorResponse,
    ProcessInvoker, Verdict, interpret,
};
