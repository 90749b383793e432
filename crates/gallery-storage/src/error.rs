//! Error types for gallery-storage.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File not found error
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Path rejected before touching the filesystem
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// IO error with the path that caused it
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.display().to_string())
        } else {
            Error::Io {
                path: path.display().to_string(),
                source,
            }
        }
    }
}
