//! Configuration management for the gallery.
//!
//! Loads configuration from environment variables (and a `.env` file if
//! present). Unparsable values fall back to their defaults.

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

use gallery_models::PlatformProfile;
use tracing::warn;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub platform: PlatformConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub profile: PlatformProfile,
    /// Origin the webview serves local files from (default: "capacitor://localhost")
    pub webview_origin: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the photo files
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// JPEG quality requested from the camera, 0-100 (default: 100)
    pub quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: PlatformConfig {
                profile: PlatformProfile::Rich,
                webview_origin: "capacitor://localhost".to_string(),
            },
            storage: StorageConfig {
                data_dir: PathBuf::from("./data/photos"),
            },
            database: DatabaseConfig {
                path: "./data/gallery.db".to_string(),
            },
            capture: CaptureConfig { quality: 100 },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            platform: PlatformConfig {
                profile: parse_or("GALLERY_PROFILE", defaults.platform.profile),
                webview_origin: env_or("GALLERY_WEBVIEW_ORIGIN", &defaults.platform.webview_origin)
                    .trim_end_matches('/')
                    .to_string(),
            },
            storage: StorageConfig {
                data_dir: env::var("GALLERY_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.data_dir),
            },
            database: DatabaseConfig {
                path: env_or("GALLERY_DATABASE_PATH", &defaults.database.path),
            },
            capture: CaptureConfig {
                quality: parse_or("GALLERY_CAPTURE_QUALITY", defaults.capture.quality).min(100),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
