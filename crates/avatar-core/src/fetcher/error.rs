//! The single failure kind of a fetch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that stopped the image from landing on disk. Callers treat every
/// variant the same way; the split only keeps the message precise.
#[derive(Debug, Error)]
pub enum DownloadFailure {
    /// libcurl reported an error (DNS, connection, TLS, malformed URL, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("HTTP Error {0}")]
    Http(u32),
    /// Creating, writing or renaming the local file failed.
    #[error("{}: {}", .path.display(), .source)]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadFailure {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}
