//! Configuration management for the portal
//!
//! This module handles loading, validation, and management of portal configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PortalError, Result};
use loader::env_var;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the portal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Portal configuration
    pub portal: PortalConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, env_var).await
    }

    /// Load configuration from a YAML file, taking overrides from `lookup`
    pub async fn from_file_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml_with(&content, lookup)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text, then apply environment overrides
    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::from_yaml_with(content, env_var)
    }

    /// Parse configuration from YAML text, taking overrides from `lookup`
    pub fn from_yaml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut portal: PortalConfig = serde_yaml::from_str(content)?;
        portal.apply_overrides(lookup)?;

        let config = Self { portal };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            portal: PortalConfig::default().apply_env_overrides()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.portal.logging
    }

    /// Get branding configuration
    pub fn branding(&self) -> &BrandingConfig {
        &self.portal.branding
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.portal
            .logging
            .validate()
            .map_err(|e| PortalError::validation(format!("Logging config error: {}", e)))?;

        self.portal
            .branding
            .validate()
            .map_err(|e| PortalError::validation(format!("Branding config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.portal = self.portal.merge(other.portal);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.portal)?)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.portal)?)
    }
}
