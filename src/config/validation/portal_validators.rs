//! Portal configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for PortalConfig {
    fn validate(&self) -> Result<(), String> {
        self.logging.validate()?;
        self.branding.validate()?;
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating logging configuration");

        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Invalid log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}

impl Validate for BrandingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating branding configuration");

        if self.default_logo.trim().is_empty() {
            return Err("Default logo cannot be empty".to_string());
        }

        let titles = [
            ("admin_title", &self.admin_title),
            ("evaluator_title", &self.evaluator_title),
            ("company_fallback", &self.company_fallback),
            ("worker_fallback", &self.worker_fallback),
            ("guest_fallback", &self.guest_fallback),
            ("unknown_fallback", &self.unknown_fallback),
        ];
        for (name, title) in titles {
            if title.trim().is_empty() {
                return Err(format!("Branding {} cannot be empty", name));
            }
        }

        Ok(())
    }
}
