//! Platform image resolution.
//!
//! Turns a fresh capture, or a record loaded from storage, into something
//! a renderer can display. How that works depends on the platform profile:
//!
//! - Rich: files are addressable by URI. A capture is resolved once, at
//!   save time, into a webview URL that stays valid across sessions, so
//!   loading needs no file reads at all.
//! - Constrained: there is no file addressing. A capture renders from the
//!   camera's in-session path; on every load the file bytes are read back
//!   and inlined as a data URI.
//!
//! The profile is picked once, by [`resolver_for`].

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gallery_models::{CaptureDescriptor, PhotoRecord, PlatformProfile};
use tracing::debug;

use crate::capabilities::{CameraCapability, FileStorageCapability, PlatformCapability};
use crate::error::{Error, Result};
use crate::services::webview::convert_file_src;

/// Profile-specific image handling.
#[async_trait]
pub trait PlatformImageResolver: Send + Sync {
    /// The profile this resolver implements.
    fn profile(&self) -> PlatformProfile;

    /// Pull the captured image's contents as base64.
    async fn read_captured(
        &self,
        camera: &dyn CameraCapability,
        descriptor: &CaptureDescriptor,
    ) -> Result<String>;

    /// Build the record for a capture already written under `file_name`.
    async fn resolve_capture(
        &self,
        descriptor: &CaptureDescriptor,
        file_name: &str,
    ) -> Result<PhotoRecord>;

    /// Restore the renderable form of a record loaded from storage.
    async fn rehydrate(&self, record: PhotoRecord) -> Result<PhotoRecord>;
}

/// Pick the resolver for the active platform profile.
pub fn resolver_for(
    platform: &dyn PlatformCapability,
    files: Arc<dyn FileStorageCapability>,
    webview_origin: &str,
) -> Arc<dyn PlatformImageResolver> {
    match platform.profile() {
        PlatformProfile::Rich => Arc::new(RichResolver::new(files, webview_origin)),
        PlatformProfile::Constrained => Arc::new(ConstrainedResolver::new(files)),
    }
}

/// Resolver for platforms with native file access.
pub struct RichResolver {
    files: Arc<dyn FileStorageCapability>,
    webview_origin: String,
}

impl RichResolver {
    pub fn new(files: Arc<dyn FileStorageCapability>, webview_origin: impl Into<String>) -> Self {
        Self {
            files,
            webview_origin: webview_origin.into(),
        }
    }
}

#[async_trait]
impl PlatformImageResolver for RichResolver {
    fn profile(&self) -> PlatformProfile {
        PlatformProfile::Rich
    }

    async fn read_captured(
        &self,
        _camera: &dyn CameraCapability,
        descriptor: &CaptureDescriptor,
    ) -> Result<String> {
        let native_path = descriptor
            .native_path
            .as_deref()
            .ok_or_else(|| Error::Capture("Camera returned no native path".to_string()))?;
        self.files.read(native_path).await
    }

    async fn resolve_capture(
        &self,
        _descriptor: &CaptureDescriptor,
        file_name: &str,
    ) -> Result<PhotoRecord> {
        let uri = self.files.resolve_uri(file_name).await?;
        let webview_path = convert_file_src(&self.webview_origin, &uri);
        debug!("Resolved {} to {}", uri, webview_path);

        Ok(PhotoRecord::new(file_name).with_webview_path(webview_path))
    }

    async fn rehydrate(&self, record: PhotoRecord) -> Result<PhotoRecord> {
        // The stored webview path is already valid.
        Ok(record)
    }
}

/// Resolver for platforms that must hold image bytes in memory.
pub struct ConstrainedResolver {
    files: Arc<dyn FileStorageCapability>,
}

impl ConstrainedResolver {
    pub fn new(files: Arc<dyn FileStorageCapability>) -> Self {
        Self { files }
    }
}

#[async_trait]
impl PlatformImageResolver for ConstrainedResolver {
    fn profile(&self) -> PlatformProfile {
        PlatformProfile::Constrained
    }

    async fn read_captured(
        &self,
        camera: &dyn CameraCapability,
        descriptor: &CaptureDescriptor,
    ) -> Result<String> {
        let transient_path = transient_path(descriptor)?;
        let bytes = camera.fetch_transient(transient_path).await?;
        Ok(STANDARD.encode(bytes))
    }

    async fn resolve_capture(
        &self,
        descriptor: &CaptureDescriptor,
        file_name: &str,
    ) -> Result<PhotoRecord> {
        let transient_path = transient_path(descriptor)?;
        Ok(PhotoRecord::new(file_name).with_webview_path(transient_path))
    }

    async fn rehydrate(&self, record: PhotoRecord) -> Result<PhotoRecord> {
        let contents = self.files.read(&record.filepath).await?;

        // The in-session path from the previous run is dead; render from
        // the inlined data instead.
        Ok(PhotoRecord::new(record.filepath).with_base64_contents(&contents))
    }
}

fn transient_path(descriptor: &CaptureDescriptor) -> Result<&str> {
    descriptor
        .transient_path
        .as_deref()
        .ok_or_else(|| Error::Capture("Camera returned no transient path".to_string()))
}
