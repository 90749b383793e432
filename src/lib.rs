//! Gallery - local photo capture and persistence
//!
//! Library exports for testing and external use.

pub mod capabilities;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;

pub use gallery_models as models;
