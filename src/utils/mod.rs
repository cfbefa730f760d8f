//! Utility modules for the portal
//!
//! - **error**: Error types shared by configuration loading and the CLI
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{PortalError, Result};
