//! Camera request and response types.

use serde::{Deserialize, Serialize};

/// Where the camera should take the image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraSource {
    /// Ask the user to choose.
    Prompt,
    /// Take a new photo.
    Camera,
    /// Pick from the device's existing photos.
    Photos,
}

/// How the camera should hand back the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureResultType {
    /// A path/URI reference; the caller reads and decodes the bytes itself.
    Uri,
    /// Inline base64 contents.
    Base64,
    /// An inline data URI.
    DataUrl,
}

/// Options passed to a camera capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// JPEG quality, 0-100.
    pub quality: u8,
    pub source: CameraSource,
    pub result_type: CaptureResultType,
}

impl CaptureOptions {
    /// Options for a fresh camera photo returned by reference.
    pub fn camera(quality: u8) -> Self {
        Self {
            quality: quality.min(100),
            source: CameraSource::Camera,
            result_type: CaptureResultType::Uri,
        }
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self::camera(100)
    }
}

/// What a camera returns after a successful capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureDescriptor {
    /// Native file path of the captured image, if the platform exposes one.
    pub native_path: Option<String>,
    /// Session-local path the image can be fetched or rendered from.
    pub transient_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_options_request_uri() {
        let options = CaptureOptions::camera(100);
        assert_eq!(options.result_type, CaptureResultType::Uri);
        assert_eq!(options.source, CameraSource::Camera);
        assert_eq!(options.quality, 100);
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(CaptureOptions::camera(250).quality, 100);
    }
}
