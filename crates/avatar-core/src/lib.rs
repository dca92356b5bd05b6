pub mod config;
pub mod logging;

pub mod fetcher;
pub mod report;
pub mod request;
pub mod storage;

pub use fetcher::{fetch, DownloadFailure, DownloadResult, Downloaded};
pub use request::{DownloadRequest, DEFAULT_DESTINATION};
