//! Platform capabilities consumed by the gallery.
//!
//! The gallery core never touches a camera, a filesystem or a database
//! directly. It talks to these traits, and the host wires in whatever
//! implementation the platform provides:
//! - Platform (which capability profile is active)
//! - FileStorage (photo files in a durable directory)
//! - KeyValueStorage (the persisted photo list)
//! - Camera (capturing an image)

mod camera;
mod filesystem;
mod platform;
mod preferences;

pub use camera::ImportCamera;
pub use filesystem::LocalFileStorage;
pub use platform::StaticPlatform;
pub use preferences::{MemoryKeyValueStore, SqliteKeyValueStore};

use async_trait::async_trait;
use gallery_models::{CaptureDescriptor, CaptureOptions, PlatformProfile};

use crate::error::Result;

/// Reports the active capability profile.
///
/// Must be pure: the same value for the lifetime of the process.
pub trait PlatformCapability: Send + Sync {
    fn profile(&self) -> PlatformProfile;
}

/// Byte storage against named paths in a durable directory.
///
/// File contents cross this boundary base64-encoded, the way the
/// platform filesystem bridge exchanges them.
#[async_trait]
pub trait FileStorageCapability: Send + Sync {
    /// Read a file, returning its contents as base64.
    async fn read(&self, path: &str) -> Result<String>;

    /// Write base64 `data` to `path`, replacing any existing file.
    async fn write(&self, path: &str, data: &str) -> Result<()>;

    /// Resolve a stable native URI (e.g. `file:///...`) for `path`.
    async fn resolve_uri(&self, path: &str) -> Result<String>;

    /// Delete the file at `path`.
    ///
    /// Fails with [`crate::Error::FileNotFound`] if it does not exist.
    async fn delete(&self, path: &str) -> Result<()>;
}

/// Durable get/set of opaque string values.
#[async_trait]
pub trait KeyValueStorageCapability: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Produces captured images.
#[async_trait]
pub trait CameraCapability: Send + Sync {
    /// Capture an image.
    ///
    /// Fails with [`crate::Error::CaptureCancelled`] if the user cancels or
    /// denies the capture.
    async fn capture(&self, options: &CaptureOptions) -> Result<CaptureDescriptor>;

    /// Fetch the raw bytes behind a descriptor's transient path.
    async fn fetch_transient(&self, transient_path: &str) -> Result<Vec<u8>>;
}
