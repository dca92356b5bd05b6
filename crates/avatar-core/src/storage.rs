//! Temp-file writer that replaces the destination only once the body is complete.
//!
//! The temp file lives next to the destination so the final rename stays on one
//! filesystem. Dropping the writer without `finalize` deletes the temp file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct StorageWriter {
    file: NamedTempFile,
    destination: PathBuf,
}

impl StorageWriter {
    /// Create an empty temp file in the destination's directory.
    pub fn create(destination: &Path) -> io::Result<Self> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = tempfile::Builder::new()
            .prefix(".download_avatar-")
            .suffix(".part")
            .tempfile_in(dir)?;
        tracing::debug!(temp = %file.path().display(), "created temp file");
        Ok(Self {
            file,
            destination: destination.to_path_buf(),
        })
    }

    /// Append a chunk of the body.
    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn temp_path(&self) -> &Path {
        self.file.path()
    }

    /// Flush, then atomically rename the temp file over the destination, replacing
    /// any existing file. Returns the destination path.
    pub fn finalize(mut self) -> io::Result<PathBuf> {
        self.file.flush()?;
        self.file.as_file().sync_all()?;
        // NamedTempFile is created 0600; give the image the usual file mode.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(self.file.path(), fs::Permissions::from_mode(0o644))?;
        }
        self.file
            .persist(&self.destination)
            .map_err(|e| e.error)?;
        Ok(self.destination)
    }
}
