//! Error types for the BGG XML API2 client.

use thiserror::Error;

// Everything the client can fail with. Errors propagate straight to the
// caller; nothing is retried or suppressed internally.
#[derive(Error, Debug)]
pub enum BggError {
    #[error("unknown API method: {0}")]
    MethodNotFound(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("user not found: {0:?}")]
    UserNotFound(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, BggError>;
