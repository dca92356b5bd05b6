//! Single-stream HTTP GET through the curl easy interface.

use curl::easy::Easy;
use sha2::{Digest, Sha256};
use std::io;

use super::DownloadFailure;
use crate::storage::StorageWriter;

const MAX_REDIRECTIONS: u32 = 10;
const USER_AGENT: &str = concat!("download_avatar/", env!("CARGO_PKG_VERSION"));

/// GETs `url`, streaming the body into `storage` and `hasher`.
/// Returns the number of body bytes written.
pub(super) fn get_into(
    url: &str,
    storage: &mut StorageWriter,
    hasher: &mut Sha256,
) -> Result<u64, DownloadFailure> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    easy.useragent(USER_AGENT)?;

    let mut written = 0u64;
    let mut write_err: Option<io::Error> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match storage.write_all(data) {
            Ok(()) => {
                hasher.update(data);
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    // A short write makes curl report a write error; the io error says more.
    if let Some(e) = write_err {
        return Err(DownloadFailure::storage(storage.destination(), e));
    }
    performed?;

    // 0 means the scheme has no status line (file://).
    let code = easy.response_code()?;
    if code != 0 && !(200..300).contains(&code) {
        return Err(DownloadFailure::Http(code));
    }
    if let Ok(Some(effective)) = easy.effective_url() {
        if effective != url {
            tracing::debug!(effective, "followed redirect");
        }
    }
    tracing::debug!(code, bytes = written, "transfer finished");
    Ok(written)
}
