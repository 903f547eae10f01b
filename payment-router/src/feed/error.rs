//! Routing table feed error types.

use std::path::PathBuf;

/// Errors that can occur while loading the routing table document.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Reading the local document failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Document is not a JSON array of routing rows
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
