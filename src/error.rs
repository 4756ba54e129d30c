use thiserror::Error;

use crate::crawler::fetch::FetchError;

/// Errors surfaced by the library's fallible entry points
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base URL could not be parsed
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// A document with this URL is already stored
    #[error("duplicate document URL: {0}")]
    DuplicateUrl(String),

    /// Configuration file could not be read
    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration JSON could not be parsed
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("http client setup failed: {0}")]
    Http(#[from] FetchError),
}
