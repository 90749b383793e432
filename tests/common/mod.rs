//! Common test utilities: recording fakes for every capability.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gallery::capabilities::{CameraCapability, FileStorageCapability, KeyValueStorageCapability};
use gallery::models::{CaptureDescriptor, CaptureOptions, PhotoRecord};
use gallery::services::{Clock, PhotoCaptureCoordinator, PhotoRecordStore, PlatformImageResolver};
use gallery::{Error, Result};

pub const ORIGIN: &str = "capacitor://localhost";

/// In-memory file storage that records every call.
///
/// `resolve_uri` reports files as living under `/data`.
#[derive(Default)]
pub struct RecordingFiles {
    pub contents: Mutex<HashMap<String, String>>,
    pub reads: Mutex<Vec<String>>,
    pub writes: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<String>>,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl RecordingFiles {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put(&self, path: &str, data: &str) {
        self.contents
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.contents.lock().unwrap().get(path).cloned()
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStorageCapability for RecordingFiles {
    async fn read(&self, path: &str) -> Result<String> {
        self.reads.lock().unwrap().push(path.to_string());
        tokio::task::yield_now().await;
        self.get(path)
            .ok_or_else(|| Error::FileNotFound(path.to_string()))
    }

    async fn write(&self, path: &str, data: &str) -> Result<()> {
        tokio::task::yield_now().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::FileIo {
                path: path.to_string(),
                message: "disk full".to_string(),
            });
        }
        self.writes.lock().unwrap().push(path.to_string());
        self.put(path, data);
        Ok(())
    }

    async fn resolve_uri(&self, path: &str) -> Result<String> {
        Ok(format!("file:///data/{}", path))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.deletes.lock().unwrap().push(path.to_string());
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Error::FileIo {
                path: path.to_string(),
                message: "permission denied".to_string(),
            });
        }
        match self.contents.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(Error::FileNotFound(path.to_string())),
        }
    }
}

/// In-memory key-value storage that records every write.
#[derive(Default)]
pub struct RecordingKv {
    pub values: Mutex<HashMap<String, String>>,
    pub sets: Mutex<Vec<String>>,
    pub fail_sets: AtomicBool,
    pub fail_gets: AtomicBool,
}

impl RecordingKv {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_photos(blob: &str) -> Arc<Self> {
        let kv = Self::default();
        kv.values
            .lock()
            .unwrap()
            .insert("photos".to_string(), blob.to_string());
        Arc::new(kv)
    }

    pub fn photos_blob(&self) -> Option<String> {
        self.values.lock().unwrap().get("photos").cloned()
    }

    pub fn persisted_filepaths(&self) -> Vec<String> {
        let blob = self.photos_blob().unwrap_or_else(|| "[]".to_string());
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["filepath"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn set_count(&self) -> usize {
        self.sets.lock().unwrap().len()
    }
}

#[async_trait]
impl KeyValueStorageCapability for RecordingKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(Error::Persistence("storage unavailable".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::task::yield_now().await;
        if self.fail_sets.load(Ordering::SeqCst) {
            return Err(Error::Persistence("storage unavailable".to_string()));
        }
        self.sets.lock().unwrap().push(value.to_string());
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Camera that "captures" by seeding a native file in `files` and
/// registering a transient path.
pub struct FakeCamera {
    files: Arc<RecordingFiles>,
    counter: AtomicUsize,
    pub transient: Mutex<HashMap<String, Vec<u8>>>,
    pub options_seen: Mutex<Vec<CaptureOptions>>,
    pub cancel: AtomicBool,
}

impl FakeCamera {
    pub fn new(files: Arc<RecordingFiles>) -> Arc<Self> {
        Arc::new(Self {
            files,
            counter: AtomicUsize::new(0),
            transient: Mutex::new(HashMap::new()),
            options_seen: Mutex::new(Vec::new()),
            cancel: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl CameraCapability for FakeCamera {
    async fn capture(&self, options: &CaptureOptions) -> Result<CaptureDescriptor> {
        self.options_seen.lock().unwrap().push(options.clone());
        tokio::task::yield_now().await;
        if self.cancel.load(Ordering::SeqCst) {
            return Err(Error::CaptureCancelled);
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let native_path = format!("/tmp/capture-{}.jpg", n);
        // "native" in base64
        self.files.put(&native_path, "bmF0aXZl");
        let transient_path = format!("blob:localhost/{}", n);
        self.transient
            .lock()
            .unwrap()
            .insert(transient_path.clone(), b"A".to_vec());

        Ok(CaptureDescriptor {
            native_path: Some(native_path),
            transient_path: Some(transient_path),
        })
    }

    async fn fetch_transient(&self, transient_path: &str) -> Result<Vec<u8>> {
        tokio::task::yield_now().await;
        self.transient
            .lock()
            .unwrap()
            .get(transient_path)
            .cloned()
            .ok_or_else(|| Error::FileNotFound(transient_path.to_string()))
    }
}

/// Clock returning `start`, `start + 1`, ... on successive calls.
pub fn stepping_clock(start: i64) -> Clock {
    let next = Arc::new(AtomicI64::new(start));
    Arc::new(move || next.fetch_add(1, Ordering::SeqCst))
}

/// Clock that always returns `millis`.
pub fn fixed_clock(millis: i64) -> Clock {
    Arc::new(move || millis)
}

pub fn store(
    kv: Arc<RecordingKv>,
    files: Arc<RecordingFiles>,
    resolver: Arc<dyn PlatformImageResolver>,
) -> Arc<PhotoRecordStore> {
    Arc::new(PhotoRecordStore::new(kv, files, resolver))
}

pub fn coordinator(
    camera: Arc<FakeCamera>,
    files: Arc<RecordingFiles>,
    resolver: Arc<dyn PlatformImageResolver>,
    store: Arc<PhotoRecordStore>,
    clock: Clock,
) -> PhotoCaptureCoordinator {
    PhotoCaptureCoordinator::new(camera, files, resolver, store).with_clock(clock)
}

pub fn filepaths(records: &[PhotoRecord]) -> Vec<&str> {
    records.iter().map(|r| r.filepath.as_str()).collect()
}
