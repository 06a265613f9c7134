use thiserror::Error;

use crate::config::TOKEN_VAR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("environment variable {} is missing or empty", TOKEN_VAR)]
    MissingToken,

    #[error("{} contains characters not allowed in an HTTP header", TOKEN_VAR)]
    InvalidToken,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Non-2xx answer from the API, with the `message` field of the body when present
    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
