//! Platform capability profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which runtime capability profile is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformProfile {
    /// Native file-system access with file-URI rewriting.
    Rich,
    /// No native file access; images must be materialized in memory.
    Constrained,
}

impl PlatformProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rich => "rich",
            Self::Constrained => "constrained",
        }
    }
}

impl fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rich" | "hybrid" | "native" => Ok(Self::Rich),
            "constrained" | "web" => Ok(Self::Constrained),
            _ => Err(format!("Unknown platform profile: {}", s)),
        }
    }
}
