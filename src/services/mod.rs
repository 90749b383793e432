//! Service layer for the gallery.
//!
//! - PhotoRecordStore (in-memory photo list and its durable form)
//! - PlatformImageResolver (profile-specific rendering of records)
//! - PhotoCaptureCoordinator (capture to stored record)
//! - PhotoGallery (facade over the above)
//! - Webview (native URI to webview URL rewriting)

pub mod capture;
mod gallery;
pub mod photo_store;
pub mod resolver;
pub mod webview;

pub use capture::{system_clock, Clock, PhotoCaptureCoordinator};
pub use gallery::PhotoGallery;
pub use photo_store::PhotoRecordStore;
pub use resolver::{resolver_for, ConstrainedResolver, PlatformImageResolver, RichResolver};
pub use webview::convert_file_src;
