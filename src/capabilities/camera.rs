//! Camera that imports an existing image file.
//!
//! Used where no camera hardware is available (the command-line binary,
//! tests): the "captured" image is a file already on disk. The capture
//! reports the file's native path and also registers an in-session
//! `blob:` path holding a copy of its bytes.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use gallery_models::{CaptureDescriptor, CaptureOptions};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

use super::CameraCapability;
use crate::error::{Error, Result};

const BLOB_PREFIX: &str = "blob:localhost/";

/// Camera whose captures come from an image file.
#[derive(Debug)]
pub struct ImportCamera {
    source: PathBuf,
    transient: RwLock<HashMap<String, Vec<u8>>>,
}

impl ImportCamera {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            transient: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CameraCapability for ImportCamera {
    async fn capture(&self, options: &CaptureOptions) -> Result<CaptureDescriptor> {
        let native = fs::canonicalize(&self.source).await.map_err(|e| {
            Error::Capture(format!("Cannot open {}: {}", self.source.display(), e))
        })?;
        let bytes = fs::read(&native).await.map_err(|e| {
            Error::Capture(format!("Cannot read {}: {}", native.display(), e))
        })?;

        let transient_path = format!("{}{}", BLOB_PREFIX, uuid::Uuid::new_v4());
        debug!(
            "Imported {} ({} bytes, quality {}) as {}",
            native.display(),
            bytes.len(),
            options.quality,
            transient_path
        );
        self.transient
            .write()
            .await
            .insert(transient_path.clone(), bytes);

        Ok(CaptureDescriptor {
            native_path: Some(native.display().to_string()),
            transient_path: Some(transient_path),
        })
    }

    async fn fetch_transient(&self, transient_path: &str) -> Result<Vec<u8>> {
        self.transient
            .read()
            .await
            .get(transient_path)
            .cloned()
            .ok_or_else(|| Error::FileNotFound(transient_path.to_string()))
    }
}
