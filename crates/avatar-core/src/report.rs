//! The user-facing lines printed around a fetch.

use crate::fetcher::DownloadResult;

/// Line printed before the transfer starts.
pub fn announce(url: &str) -> String {
    format!("Téléchargement de {}...", url)
}

/// Line printed once the fetch has finished, successful or not.
pub fn outcome(result: &DownloadResult) -> String {
    match result {
        Ok(done) => format!("Image téléchargée avec succès : {}", done.path.display()),
        Err(e) => format!("Erreur lors du téléchargement : {}", e),
    }
}
