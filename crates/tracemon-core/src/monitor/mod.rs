//! Runtime monitor pipeline
//!
//! [`ProcessInvoker`] runs the external monitor, [`interpret`] classifies
//! its output, and [`Monitor`] composes the two behind a boundary that never
//! fails outward.

mod error;
mod invoker;
mod orchestrator;
mod verdict;

pub use error::MonitorError;
pub use invoker::{InvocationOptions, MonitorInvoker, ProcessInvoker};
pub use orchestrator::{Invocation, Monitor, MonitorResponse};
pub use verdict::{Verdict, interpret};
