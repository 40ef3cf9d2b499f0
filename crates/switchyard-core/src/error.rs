//! Error types for Switchyard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Trigger context errors
    #[error("Malformed trigger context: {0}")]
    MalformedInput(String),

    #[error("Cannot parse pull request number from ref: {0}")]
    UnresolvableRef(String),

    // Environment errors
    #[error("Missing environment variable: {0}")]
    MissingEnvironment(String),

    #[error("Subprocess failed: {0}")]
    SubprocessFailure(String),

    // Catalogue errors
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    // Docs patch errors
    #[error("Docs anchor not found: {0}")]
    AnchorNotFound(String),

    // Infrastructure errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
