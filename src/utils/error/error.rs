//! Error types for the portal access model

use thiserror::Error;

/// Result type alias for the portal access model
pub type Result<T> = std::result::Result<T, PortalError>;

/// Main error type for the portal access model
#[derive(Error, Debug)]
pub enum PortalError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A role name outside the closed role set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// A permission token outside the closed catalog
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
}

impl PortalError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error came from an unrecognized role or permission name
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::UnknownRole(_) | Self::UnknownPermission(_))
    }
}
