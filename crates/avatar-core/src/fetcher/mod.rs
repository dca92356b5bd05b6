//! The Fetcher: one blocking GET whose body replaces the destination file.
//!
//! The body is streamed into a temp file beside the destination and renamed over
//! it only after a successful transfer, so a failed fetch never leaves a partial
//! image behind. Every failure is returned as a [`DownloadFailure`] value.

mod error;
mod transfer;

pub use error::DownloadFailure;

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::storage::StorageWriter;

/// What a successful fetch wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the body.
    pub sha256: String,
}

pub type DownloadResult = Result<Downloaded, DownloadFailure>;

/// Download `url` into `destination`, overwriting it.
///
/// The URL is handed to libcurl untouched; redirects are followed. Network, HTTP
/// status and filesystem problems all come back as `Err`.
pub fn fetch(url: &str, destination: impl AsRef<Path>) -> DownloadResult {
    let destination = destination.as_ref();
    tracing::info!(url, destination = %destination.display(), "fetch started");

    let result = download(url, destination);
    match &result {
        Ok(done) => tracing::info!(
            path = %done.path.display(),
            bytes = done.bytes,
            sha256 = %done.sha256,
            "fetch complete"
        ),
        Err(e) => tracing::warn!(url, error = %e, "fetch failed"),
    }
    result
}

fn download(url: &str, destination: &Path) -> DownloadResult {
    let mut storage = StorageWriter::create(destination)
        .map_err(|e| DownloadFailure::storage(destination, e))?;
    let mut hasher = Sha256::new();

    let bytes = transfer::get_into(url, &mut storage, &mut hasher)?;

    let path = storage
        .finalize()
        .map_err(|e| DownloadFailure::storage(destination, e))?;
    Ok(Downloaded {
        path,
        bytes,
        sha256: hex::encode(hasher.finalize()),
    })
}
