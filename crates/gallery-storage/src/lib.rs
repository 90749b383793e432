//! File storage for gallery photos.
//!
//! Photos are stored as plain files in a single data directory:
//! ```text
//! data/photos/
//!   1700000000123.jpg
//!   1700000004567.jpg
//! ```
//!
//! Callers address files by name relative to that directory. Absolute
//! paths and `file://` URIs are accepted for reads so that images the
//! platform left elsewhere (e.g. a camera's scratch file) can be pulled in.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

mod error;
pub mod location;

pub use error::{Error, Result};
pub use location::{parse_location, Location};

/// Service for reading and writing photo files in the data directory.
#[derive(Debug, Clone)]
pub struct PhotoDirectory {
    base_path: PathBuf,
}

impl PhotoDirectory {
    /// Create a new photo directory rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Get the base path for storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Create the directory if it does not exist yet.
    pub async fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| Error::io(&self.base_path, e))?;
        info!("Photo directory ready: {}", self.base_path.display());
        Ok(())
    }

    /// Resolve a storage path to a filesystem path.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        Ok(match parse_location(path)? {
            Location::Named(name) => self.base_path.join(name),
            Location::Native(native) => native,
        })
    }

    /// Resolve a path that must live inside the directory.
    fn resolve_named(&self, path: &str) -> Result<PathBuf> {
        match parse_location(path)? {
            Location::Named(name) => Ok(self.base_path.join(name)),
            Location::Native(_) => Err(Error::InvalidPath(format!(
                "Expected a name inside the photo directory: {}",
                path
            ))),
        }
    }

    /// Read a file's raw bytes.
    pub async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let file_path = self.resolve(path)?;
        let bytes = fs::read(&file_path)
            .await
            .map_err(|e| Error::io(&file_path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), file_path.display());
        Ok(bytes)
    }

    /// Write a file, replacing any existing file with the same name.
    ///
    /// The data lands in a uniquely named sibling `.tmp` file first and is
    /// renamed into place, so readers never observe a partial image and
    /// concurrent writes to the same name each complete, the last rename
    /// winning.
    pub async fn write(&self, path: &str, bytes: &[u8]) -> Result<()> {
        let file_path = self.resolve_named(path)?;

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }

        let tmp_path = temp_path_for(&file_path);
        fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| Error::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| Error::io(&file_path, e))?;

        debug!("Wrote {} bytes to {}", bytes.len(), file_path.display());
        Ok(())
    }

    /// Delete a file. Returns [`Error::FileNotFound`] if it is already gone.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let file_path = self.resolve_named(path)?;
        fs::remove_file(&file_path)
            .await
            .map_err(|e| Error::io(&file_path, e))?;
        debug!("Deleted {}", file_path.display());
        Ok(())
    }

    /// Check if a file exists.
    pub async fn exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(file_path) => fs::metadata(&file_path).await.is_ok(),
            Err(_) => false,
        }
    }

    /// Absolute `file://` URI for a stored file.
    pub async fn uri(&self, path: &str) -> Result<String> {
        let file_path = match parse_location(path)? {
            Location::Named(name) => {
                let base = fs::canonicalize(&self.base_path)
                    .await
                    .map_err(|e| Error::io(&self.base_path, e))?;
                base.join(name)
            }
            Location::Native(native) => native,
        };
        Ok(format!("file://{}", file_path.display()))
    }
}

/// Hidden per-write temp file next to `file_path`.
fn temp_path_for(file_path: &Path) -> PathBuf {
    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_path.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
}
