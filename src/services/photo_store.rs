//! The photo record store.
//!
//! Owns the in-memory, newest-first list of photos and is the only thing
//! that writes the persisted list. The list is stored as a JSON array
//! under [`PHOTO_STORAGE_KEY`]:
//! ```json
//! [{"filepath":"1700000004567.jpg","webviewPath":"capacitor://localhost/_capacitor_file_/..."},
//!  {"filepath":"1700000000123.jpg"}]
//! ```
//! Decoded image data is never written.
//!
//! Mutations hold the list lock across the durable write, so overlapping
//! `append`/`remove` calls apply one after another, each against the
//! latest list, and their writes land in call order.

use std::sync::Arc;

use futures::future::try_join_all;
use gallery_models::{decode_photo_list, encode_photo_list, PhotoRecord, PHOTO_STORAGE_KEY};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::capabilities::{FileStorageCapability, KeyValueStorageCapability};
use crate::error::Result;
use crate::services::resolver::PlatformImageResolver;

/// Store for the gallery's photo records.
pub struct PhotoRecordStore {
    kv: Arc<dyn KeyValueStorageCapability>,
    files: Arc<dyn FileStorageCapability>,
    resolver: Arc<dyn PlatformImageResolver>,
    photos: Mutex<Vec<PhotoRecord>>,
}

impl PhotoRecordStore {
    pub fn new(
        kv: Arc<dyn KeyValueStorageCapability>,
        files: Arc<dyn FileStorageCapability>,
        resolver: Arc<dyn PlatformImageResolver>,
    ) -> Self {
        Self {
            kv,
            files,
            resolver,
            photos: Mutex::new(Vec::new()),
        }
    }

    /// Load the persisted list, rehydrating every record for rendering.
    ///
    /// A missing or malformed list loads as empty. Errors from the
    /// key-value store, or from reading any record's file, are returned
    /// and leave the in-memory list untouched.
    pub async fn load(&self) -> Result<Vec<PhotoRecord>> {
        let mut photos = self.photos.lock().await;

        let persisted = self.read_persisted().await?;
        let records =
            try_join_all(persisted.into_iter().map(|record| self.resolver.rehydrate(record)))
                .await?;

        info!(
            "Loaded {} photos ({} profile)",
            records.len(),
            self.resolver.profile()
        );
        *photos = records.clone();
        Ok(records)
    }

    /// Prepend `record` and persist the full list.
    ///
    /// If the durable write fails the in-memory list keeps the record;
    /// the next successful write or a reload reconciles the two.
    pub async fn append(&self, record: PhotoRecord) -> Result<()> {
        let mut photos = self.photos.lock().await;

        debug!("Appending {}", record.filepath);
        photos.insert(0, record);
        self.persist(&photos).await
    }

    /// Delete the file for `filepath`, drop its record, persist the list.
    ///
    /// A file that is already gone is logged and skipped. Any other delete
    /// failure is returned with the record still in the list.
    pub async fn remove(&self, filepath: &str) -> Result<()> {
        let mut photos = self.photos.lock().await;

        let Some(index) = photos.iter().position(|p| p.filepath == filepath) else {
            warn!("No photo with filepath {}", filepath);
            return Ok(());
        };

        match self.files.delete(filepath).await {
            Ok(()) => debug!("Deleted file {}", filepath),
            Err(e) if e.is_not_found() => warn!("File {} already deleted", filepath),
            Err(e) => return Err(e),
        }
        photos.remove(index);

        self.persist(&photos).await
    }

    /// Snapshot of the current list, newest first.
    pub async fn photos(&self) -> Vec<PhotoRecord> {
        self.photos.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.photos.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.photos.lock().await.is_empty()
    }

    async fn read_persisted(&self) -> Result<Vec<PhotoRecord>> {
        let Some(blob) = self.kv.get(PHOTO_STORAGE_KEY).await? else {
            debug!("No persisted photo list");
            return Ok(Vec::new());
        };

        let persisted = match decode_photo_list(&blob) {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("Discarding malformed photo list: {}", e);
                return Ok(Vec::new());
            }
        };

        Ok(persisted
            .into_iter()
            .filter(|p| {
                if !p.is_valid() {
                    warn!("Skipping persisted photo with empty filepath");
                }
                p.is_valid()
            })
            .map(PhotoRecord::from)
            .collect())
    }

    async fn persist(&self, photos: &[PhotoRecord]) -> Result<()> {
        let blob = encode_photo_list(photos)?;
        self.kv.set(PHOTO_STORAGE_KEY, &blob).await?;
        debug!("Persisted {} photos", photos.len());
        Ok(())
    }
}
