//! Photo records and their persisted form.

use serde::{Deserialize, Serialize};

use crate::JPEG_DATA_URI_PREFIX;

/// A photo in the gallery.
///
/// `filepath` is the durable identity of the record. `webview_path` is a
/// renderable reference for the current session. `decoded_data` is an
/// inline data URI that only ever lives in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub filepath: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webview_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded_data: Option<String>,
}

impl PhotoRecord {
    /// Create a record with only its durable identity set.
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            webview_path: None,
            decoded_data: None,
        }
    }

    /// Attach a session-valid renderable path.
    pub fn with_webview_path(mut self, webview_path: impl Into<String>) -> Self {
        self.webview_path = Some(webview_path.into());
        self
    }

    /// Attach inline image data from base64 file contents.
    pub fn with_base64_contents(mut self, contents: &str) -> Self {
        self.decoded_data = Some(format!("{}{}", JPEG_DATA_URI_PREFIX, contents));
        self
    }

    /// Drop the in-memory image data, leaving the durable fields.
    pub fn strip_decoded(&mut self) {
        self.decoded_data = None;
    }
}

/// The durable form of a [`PhotoRecord`].
///
/// Has no field for decoded image data, so anything serialized through it
/// is stripped by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPhoto {
    pub filepath: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webview_path: Option<String>,
}

impl PersistedPhoto {
    /// A persisted entry is usable only if it names a file.
    pub fn is_valid(&self) -> bool {
        !self.filepath.trim().is_empty()
    }
}

impl From<&PhotoRecord> for PersistedPhoto {
    fn from(record: &PhotoRecord) -> Self {
        Self {
            filepath: record.filepath.clone(),
            webview_path: record.webview_path.clone(),
        }
    }
}

impl From<PersistedPhoto> for PhotoRecord {
    fn from(persisted: PersistedPhoto) -> Self {
        Self {
            filepath: persisted.filepath,
            webview_path: persisted.webview_path,
            decoded_data: None,
        }
    }
}

/// Serialize records into the durable JSON array, stripping decoded data.
pub fn encode_photo_list(records: &[PhotoRecord]) -> serde_json::Result<String> {
    let persisted: Vec<PersistedPhoto> = records.iter().map(PersistedPhoto::from).collect();
    serde_json::to_string(&persisted)
}

/// Parse the durable JSON array back into records.
///
/// Unknown fields (including a `base64` field written by older clients)
/// are ignored.
pub fn decode_photo_list(blob: &str) -> serde_json::Result<Vec<PersistedPhoto>> {
    serde_json::from_str(blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_strips_decoded_data() {
        let records = vec![
            PhotoRecord::new("2000.jpg")
                .with_webview_path("blob:localhost/abc")
                .with_base64_contents("QQ=="),
            PhotoRecord::new("1000.jpg"),
        ];

        let blob = encode_photo_list(&records).unwrap();

        assert_eq!(
            blob,
            r#"[{"filepath":"2000.jpg","webviewPath":"blob:localhost/abc"},{"filepath":"1000.jpg"}]"#
        );
        assert!(!blob.contains("decodedData"));
        assert!(!blob.contains("QQ=="));
    }

    #[test]
    fn test_decode_ignores_legacy_base64_field() {
        let blob = r#"[{"filepath":"1000.jpg","webviewPath":"x","base64":"data:image/jpeg;base64,QQ=="}]"#;
        let photos = decode_photo_list(blob).unwrap();

        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].filepath, "1000.jpg");
        assert_eq!(photos[0].webview_path.as_deref(), Some("x"));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_photo_list("{not json").is_err());
        assert!(decode_photo_list(r#"{"filepath":"1.jpg"}"#).is_err());
    }

    #[test]
    fn test_with_base64_contents_builds_data_uri() {
        let record = PhotoRecord::new("1000.jpg").with_base64_contents("QQ==");
        assert_eq!(
            record.decoded_data.as_deref(),
            Some("data:image/jpeg;base64,QQ==")
        );
    }

    #[test]
    fn test_persisted_validity() {
        assert!(PersistedPhoto { filepath: "1.jpg".into(), webview_path: None }.is_valid());
        assert!(!PersistedPhoto { filepath: "  ".into(), webview_path: None }.is_valid());
    }
}
