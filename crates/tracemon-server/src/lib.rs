//! Tracemon HTTP service
//!
//! Exposes session, trace and verdict endpoints over HTTP and provides the
//! `tracemon` command-line entry points (`serve`, `check`, `config show`).

pub mod args;
pub mod http;
pub mod logging;
pub mod router;

pub use args::{Cli, Commands, ConfigAction};
pub use http::{AppState, build_router, serve};
