use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::Result;
use super::models::LibraryData;

/// JSON-file-backed persistence for the library document.
///
/// The whole document is read once at startup and rewritten in full after
/// every successful mutation. There is no append log and no incremental diff;
/// the file on disk is always a complete, pretty-printed snapshot.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document from disk.
    ///
    /// A missing file or an unreadable/unparsable one yields the empty
    /// document; startup never fails on bad data, it starts fresh.
    pub fn load(&self) -> LibraryData {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                info!(
                    "No library data at {} ({}), starting empty",
                    self.path.display(),
                    err
                );
                return LibraryData::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(data) => {
                debug!("Loaded library data from {}", self.path.display());
                data
            }
            Err(err) => {
                warn!(
                    "Could not parse {}, starting empty: {}",
                    self.path.display(),
                    err
                );
                LibraryData::default()
            }
        }
    }

    /// Write the full document back to disk, pretty-printed UTF-8 with
    /// non-ASCII characters preserved literally.
    pub fn save(&self, data: &LibraryData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, raw)?;
        debug!("Saved library data to {}", self.path.display());
        Ok(())
    }
}
