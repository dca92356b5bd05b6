//! Input shape of a single fetch.

use std::path::{Path, PathBuf};

use crate::fetcher::{self, DownloadResult};

/// Filename used when no destination is configured.
pub const DEFAULT_DESTINATION: &str = "avatar.png";

/// One URL to fetch and the file it lands in. Consumed by [`DownloadRequest::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    destination: PathBuf,
}

impl DownloadRequest {
    /// Request writing to [`DEFAULT_DESTINATION`].
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }

    /// Override the destination. An empty path keeps the current one, so the
    /// destination is never empty.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        let destination = destination.into();
        if !destination.as_os_str().is_empty() {
            self.destination = destination;
        }
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn fetch(self) -> DownloadResult {
        fetcher::fetch(&self.url, &self.destination)
    }
}
