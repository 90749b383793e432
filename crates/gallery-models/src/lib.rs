//! Data models for the photo gallery.
//!
//! Defines the records kept in the gallery, their durable form, the
//! capture request/response types exchanged with a camera, and the
//! platform capability profile.
//!
//! This crate has no I/O and no async dependencies: it is pure data.

mod capture;
mod photo;
mod platform;

pub use capture::*;
pub use photo::*;
pub use platform::*;

/// Key under which the photo list is persisted in key-value storage.
pub const PHOTO_STORAGE_KEY: &str = "photos";

/// MIME prefix used when rendering image bytes inline.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// File name a capture taken at `timestamp_millis` is stored under.
pub fn capture_file_name(timestamp_millis: i64) -> String {
    format!("{}.jpg", timestamp_millis)
}
