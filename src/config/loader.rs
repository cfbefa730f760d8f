//! Configuration loading utilities
//!
//! Environment overrides applied on top of file or default configuration.

use super::models::*;
use crate::utils::error::{PortalError, Result};
use std::env;
use tracing::debug;

pub const ENV_LOG_LEVEL: &str = "PORTAL_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "PORTAL_LOG_JSON";
pub const ENV_DEFAULT_LOGO: &str = "PORTAL_DEFAULT_LOGO";

/// Read an override from the process environment
pub fn env_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

impl PortalConfig {
    /// Apply overrides from environment variables
    pub fn apply_env_overrides(mut self) -> Result<Self> {
        self.apply_overrides(env_var)?;
        Ok(self)
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            debug!("Overriding log level from {}", ENV_LOG_LEVEL);
            self.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.logging.json = json
                .parse()
                .map_err(|e| PortalError::config(format!("Invalid {}: {}", ENV_LOG_JSON, e)))?;
        }
        if let Some(logo) = lookup(ENV_DEFAULT_LOGO) {
            debug!("Overriding default logo from {}", ENV_DEFAULT_LOGO);
            self.branding.default_logo = logo;
        }
        Ok(())
    }
}
