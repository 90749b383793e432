//! Local filesystem photo storage.
//!
//! Files are kept as raw image bytes on disk; the capability boundary
//! exchanges them as base64.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gallery_storage::PhotoDirectory;

use super::FileStorageCapability;
use crate::error::Result;

/// File storage backed by a local photo directory.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    directory: PhotoDirectory,
}

impl LocalFileStorage {
    pub fn new(directory: PhotoDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl FileStorageCapability for LocalFileStorage {
    async fn read(&self, path: &str) -> Result<String> {
        let bytes = self.directory.read(path).await?;
        Ok(STANDARD.encode(bytes))
    }

    async fn write(&self, path: &str, data: &str) -> Result<()> {
        let bytes = STANDARD.decode(data)?;
        self.directory.write(path, &bytes).await?;
        Ok(())
    }

    async fn resolve_uri(&self, path: &str) -> Result<String> {
        Ok(self.directory.uri(path).await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.directory.delete(path).await?;
        Ok(())
    }
}
