//! Photo capture orchestration.

use std::sync::Arc;

use gallery_models::{capture_file_name, CaptureOptions, PhotoRecord};
use tracing::{info, warn};

use crate::capabilities::{CameraCapability, FileStorageCapability};
use crate::error::Result;
use crate::services::photo_store::PhotoRecordStore;
use crate::services::resolver::PlatformImageResolver;

/// Source of capture timestamps, in milliseconds since the Unix epoch.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Wall-clock timestamps.
pub fn system_clock() -> Clock {
    Arc::new(|| chrono::Utc::now().timestamp_millis())
}

/// Runs a capture end to end: camera, file write, record, store.
pub struct PhotoCaptureCoordinator {
    camera: Arc<dyn CameraCapability>,
    files: Arc<dyn FileStorageCapability>,
    resolver: Arc<dyn PlatformImageResolver>,
    store: Arc<PhotoRecordStore>,
    options: CaptureOptions,
    clock: Clock,
}

impl PhotoCaptureCoordinator {
    pub fn new(
        camera: Arc<dyn CameraCapability>,
        files: Arc<dyn FileStorageCapability>,
        resolver: Arc<dyn PlatformImageResolver>,
        store: Arc<PhotoRecordStore>,
    ) -> Self {
        Self {
            camera,
            files,
            resolver,
            store,
            options: CaptureOptions::default(),
            clock: system_clock(),
        }
    }

    /// Use these camera options. The result type is always forced to a
    /// URI: decoding happens here, not in the camera.
    pub fn with_options(mut self, options: CaptureOptions) -> Self {
        self.options = CaptureOptions::camera(options.quality);
        self.options.source = options.source;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Capture a photo, store its file and add it to the gallery.
    ///
    /// Nothing is added if the capture or the file write fails. If only the
    /// final persist fails, the record stays in the in-memory list and the
    /// error is returned.
    pub async fn capture(&self) -> Result<PhotoRecord> {
        // Named from the time the capture was requested, not completed.
        // Two captures in the same millisecond share a file; the last
        // write wins.
        let file_name = capture_file_name((self.clock)());

        let descriptor = self.camera.capture(&self.options).await.map_err(|e| {
            if e.is_cancelled() {
                info!("Capture cancelled");
            } else {
                warn!("Capture failed: {}", e);
            }
            e
        })?;

        let data = self
            .resolver
            .read_captured(self.camera.as_ref(), &descriptor)
            .await?;
        self.files.write(&file_name, &data).await?;

        let record = self.resolver.resolve_capture(&descriptor, &file_name).await?;
        self.store.append(record.clone()).await?;

        info!("Captured {}", record.filepath);
        Ok(record)
    }
}
