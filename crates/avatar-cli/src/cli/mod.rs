//! CLI for download_avatar: parse the URL, fetch it, print the outcome.

use avatar_core::{config, report, DownloadRequest};
use clap::Parser;
use std::process::ExitCode;

/// Printed when the URL argument is missing.
pub const USAGE: &str = "Usage: download_avatar <URL>\n\
Exemple : download_avatar https://example.com/avatar.png";

/// Download an image to the configured destination (avatar.png by default).
#[derive(Debug, Parser)]
#[command(name = "download_avatar", version)]
#[command(about = "Download an avatar image from a URL", long_about = None)]
pub struct Cli {
    /// HTTP/HTTPS URL of the image.
    pub url: Option<String>,
}

impl Cli {
    /// The URL to fetch, or `None` when it is missing or blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Parse arguments and run one download.
///
/// Exits 1 only when the URL is missing. A failed download still exits 0; the
/// outcome is reported on stdout.
pub fn run_from_args() -> ExitCode {
    let cli = Cli::parse();
    let Some(url) = cli.url() else {
        println!("{}", USAGE);
        return ExitCode::from(1);
    };

    let cfg = config::load_or_default();
    tracing::debug!("loaded config: {:?}", cfg);

    let request = DownloadRequest::new(url).with_destination(&cfg.destination);
    println!("{}", report::announce(request.url()));
    let result = request.fetch();
    println!("{}", report::outcome(&result));

    ExitCode::SUCCESS
}
