//! Interpretation of the path strings handed to storage.
//!
//! A path is either a name inside the photo directory (`1000.jpg`,
//! `2024/1000.jpg`) or a native location outside it (`/tmp/cap.jpg`,
//! `file:///tmp/cap.jpg`). Names may not escape the directory.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

const FILE_SCHEME: &str = "file://";

/// Where a storage path points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Relative to the photo directory.
    Named(PathBuf),
    /// Absolute native path.
    Native(PathBuf),
}

/// Classify and validate a storage path.
///
/// # Example
/// ```
/// use gallery_storage::location::{parse_location, Location};
/// use std::path::PathBuf;
/// assert_eq!(parse_location("1000.jpg").unwrap(), Location::Named(PathBuf::from("1000.jpg")));
/// assert!(parse_location("../etc/passwd").is_err());
/// ```
pub fn parse_location(path: &str) -> Result<Location> {
    if let Some(rest) = path.strip_prefix(FILE_SCHEME) {
        let native = PathBuf::from(rest);
        if !native.is_absolute() {
            return Err(Error::InvalidPath(format!("Not an absolute file URI: {}", path)));
        }
        return Ok(Location::Native(native));
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return Ok(Location::Native(candidate.to_path_buf()));
    }

    let mut named = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(part) => named.push(part),
            Component::CurDir => {}
            _ => {
                return Err(Error::InvalidPath(format!(
                    "Path escapes the photo directory: {}",
                    path
                )))
            }
        }
    }

    if named.as_os_str().is_empty() {
        return Err(Error::InvalidPath("Empty path".to_string()));
    }

    Ok(Location::Named(named))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_paths() {
        assert_eq!(
            parse_location("1000.jpg").unwrap(),
            Location::Named(PathBuf::from("1000.jpg"))
        );
        assert_eq!(
            parse_location("./2024/1000.jpg").unwrap(),
            Location::Named(PathBuf::from("2024/1000.jpg"))
        );
    }

    #[test]
    fn test_native_paths() {
        assert_eq!(
            parse_location("/tmp/capture.jpg").unwrap(),
            Location::Native(PathBuf::from("/tmp/capture.jpg"))
        );
        assert_eq!(
            parse_location("file:///data/1000.jpg").unwrap(),
            Location::Native(PathBuf::from("/data/1000.jpg"))
        );
    }

    #[test]
    fn test_rejected_paths() {
        assert!(parse_location("").is_err());
        assert!(parse_location(".").is_err());
        assert!(parse_location("a/../../b.jpg").is_err());
        assert!(parse_location("file://relative.jpg").is_err());
    }
}
