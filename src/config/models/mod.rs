//! Configuration data models

pub mod branding;
pub mod logging;

pub use branding::BrandingConfig;
pub use logging::{LOG_LEVELS, LoggingConfig};

use serde::{Deserialize, Serialize};

/// Top-level portal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Sidebar branding
    #[serde(default)]
    pub branding: BrandingConfig,
}

impl PortalConfig {
    /// Merge portal configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.logging = self.logging.merge(other.logging);
        self.branding = self.branding.merge(other.branding);
        self
    }
}
