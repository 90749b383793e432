//! Error types for the gallery.
//!
//! Uses thiserror for ergonomic error definitions. Errors raised at a
//! capability boundary (camera, file storage, key-value storage) are
//! surfaced to the immediate caller; nothing here retries.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Capture errors
    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Capture cancelled")]
    CaptureCancelled,

    // File errors
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("File I/O error on {path}: {message}")]
    FileIo { path: String, message: String },

    // Key-value storage errors
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Ambient errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True if the error means the target file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileNotFound(_) => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True if the user cancelled or denied the capture.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::CaptureCancelled)
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Capture(_) => "CAPTURE_ERROR",
            Self::CaptureCancelled => "CAPTURE_CANCELLED",
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::FileIo { .. } => "FILE_IO_ERROR",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<gallery_storage::Error> for Error {
    fn from(err: gallery_storage::Error) -> Self {
        match err {
            gallery_storage::Error::FileNotFound(path) => Self::FileNotFound(path),
            gallery_storage::Error::InvalidPath(message) => Self::FileIo {
                path: String::new(),
                message,
            },
            gallery_storage::Error::Io { path, source } => Self::FileIo {
                path,
                message: source.to_string(),
            },
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::FileIo {
            path: String::new(),
            message: format!("Invalid base64 contents: {}", err),
        }
    }
}
