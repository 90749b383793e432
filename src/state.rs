//! Application state for the gallery.
//!
//! Wires configuration into concrete capabilities and the services built
//! on them.

use std::sync::Arc;

use gallery_models::CaptureOptions;
use gallery_storage::PhotoDirectory;
use tracing::info;

use crate::capabilities::{
    CameraCapability, FileStorageCapability, KeyValueStorageCapability, LocalFileStorage,
    PlatformCapability, SqliteKeyValueStore, StaticPlatform,
};
use crate::config::Config;
use crate::db::DbPool;
use crate::services::{resolver_for, PhotoCaptureCoordinator, PhotoGallery, PhotoRecordStore, PlatformImageResolver};
use crate::{config, Result};

/// Shared state for the gallery.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DbPool,
    /// Active platform profile.
    pub platform: Arc<dyn PlatformCapability>,
    /// Photo file storage.
    pub files: Arc<dyn FileStorageCapability>,
    /// Durable key-value storage.
    pub kv: Arc<dyn KeyValueStorageCapability>,
    /// Resolver for the active profile.
    pub resolver: Arc<dyn PlatformImageResolver>,
    /// The photo list.
    pub store: Arc<PhotoRecordStore>,
    /// Options passed to the camera on capture.
    pub capture_options: CaptureOptions,
}

impl AppState {
    /// Create the application state from the global configuration.
    pub async fn new() -> Result<Self> {
        Self::from_config(config::config()).await
    }

    /// Create the application state from an explicit configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let db = crate::db::init_pool(&config.database.path).await?;
        crate::db::initialize_schema(&db).await?;

        let directory = PhotoDirectory::new(&config.storage.data_dir);
        directory.ensure_exists().await?;

        let platform: Arc<dyn PlatformCapability> =
            Arc::new(StaticPlatform::new(config.platform.profile));
        let files: Arc<dyn FileStorageCapability> = Arc::new(LocalFileStorage::new(directory));
        let kv: Arc<dyn KeyValueStorageCapability> = Arc::new(SqliteKeyValueStore::new(db.clone()));

        let resolver = resolver_for(
            platform.as_ref(),
            files.clone(),
            &config.platform.webview_origin,
        );
        let store = Arc::new(PhotoRecordStore::new(kv.clone(), files.clone(), resolver.clone()));

        info!(
            "Gallery initialized ({} profile, photos in {})",
            platform.profile(),
            config.storage.data_dir.display()
        );

        Ok(Self {
            db,
            platform,
            files,
            kv,
            resolver,
            store,
            capture_options: CaptureOptions::camera(config.capture.quality),
        })
    }

    /// Build a capture coordinator around `camera`.
    pub fn coordinator(&self, camera: Arc<dyn CameraCapability>) -> PhotoCaptureCoordinator {
        PhotoCaptureCoordinator::new(
            camera,
            self.files.clone(),
            self.resolver.clone(),
            self.store.clone(),
        )
        .with_options(self.capture_options.clone())
    }

    /// Build the gallery facade around `camera`.
    pub fn gallery(&self, camera: Arc<dyn CameraCapability>) -> PhotoGallery {
        PhotoGallery::new(self.store.clone(), self.coordinator(camera))
    }
}
