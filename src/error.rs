//! Error types for nutriscrape.
//!
//! Only transport, artifact and configuration problems are errors. Missing
//! markup and unparseable values never surface here: extraction resolves them
//! to sentinels and defaults instead.

use std::path::PathBuf;

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be completed (connection, TLS, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Reading or writing an artifact failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document (URL list or site profile) could not be parsed or written.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the dataset failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Extraction was asked to run before discovery produced its URL list.
    #[error("URL list not found at {}; run discovery first", .path.display())]
    MissingUrlList { path: PathBuf },

    /// A base or seed URL in a profile is not a valid absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The site profile is internally inconsistent.
    #[error("invalid site profile: {0}")]
    Profile(String),

    /// A runtime option cannot be applied (for example a malformed header value).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a fetch failure (transport or status).
    ///
    /// Fetch failures are skipped per item; everything else is a run failure.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Status { .. })
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
