//! Fixed platform profile.

use gallery_models::PlatformProfile;

use super::PlatformCapability;

/// A platform whose profile is decided once, typically from configuration.
#[derive(Debug, Clone, Copy)]
pub struct StaticPlatform {
    profile: PlatformProfile,
}

impl StaticPlatform {
    pub fn new(profile: PlatformProfile) -> Self {
        Self { profile }
    }
}

impl PlatformCapability for StaticPlatform {
    fn profile(&self) -> PlatformProfile {
        self.profile
    }
}
