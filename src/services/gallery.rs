//! Gallery facade.
//!
//! What a UI binds to: the current photo list plus the three actions it
//! can take on it.

use std::sync::Arc;

use gallery_models::PhotoRecord;

use crate::error::Result;
use crate::services::capture::PhotoCaptureCoordinator;
use crate::services::photo_store::PhotoRecordStore;

pub struct PhotoGallery {
    store: Arc<PhotoRecordStore>,
    coordinator: PhotoCaptureCoordinator,
}

impl PhotoGallery {
    pub fn new(store: Arc<PhotoRecordStore>, coordinator: PhotoCaptureCoordinator) -> Self {
        Self { store, coordinator }
    }

    /// Load the saved photos, ready to render.
    pub async fn load_saved(&self) -> Result<Vec<PhotoRecord>> {
        self.store.load().await
    }

    /// Capture a new photo; returns the updated list.
    pub async fn take_photo(&self) -> Result<Vec<PhotoRecord>> {
        self.coordinator.capture().await?;
        Ok(self.store.photos().await)
    }

    /// Delete a photo and its file; returns the updated list.
    pub async fn delete_photo(&self, filepath: &str) -> Result<Vec<PhotoRecord>> {
        self.store.remove(filepath).await?;
        Ok(self.store.photos().await)
    }

    /// The current list, newest first.
    pub async fn photos(&self) -> Vec<PhotoRecord> {
        self.store.photos().await
    }
}
