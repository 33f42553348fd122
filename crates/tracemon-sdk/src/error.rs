//! Client errors

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be parsed or joined
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, protocol or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}
