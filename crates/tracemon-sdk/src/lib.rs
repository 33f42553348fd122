//! Tracemon SDK
//!
//! A typed HTTP client for a running tracemon service.
//!
//! ```no_run
//! use tracemon_sdk::TracemonClient;
//!
//! # async fn example() -> Result<(), tracemon_sdk::ClientError> {
//! let client = TracemonClient::new("http://127.0.0.1:3000")?;
//! let session = client.create_session().await?;
//! client.store_trace(session, "1: x = 3\n").await?;
//! let result = client.receive_monitor_result(session).await?;
//! println!("verdict={} definite={}", result.verdict, result.is_definite);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::TracemonClient;
pub use error::{ClientError, ClientResult};

pub use tracemon_core::MonitorResponse;
pub use tracemon_store::SessionId;
