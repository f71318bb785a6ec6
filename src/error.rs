//! Library error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing a single documentation file.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("document has no root element")]
    NoRoot,

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Errors raised while encoding the result table.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("msgpack encoding failed: {0}")]
    MessagePack(#[from] rmp_serde::encode::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown format: {0}. Use msgpack or json")]
    UnknownFormat(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
