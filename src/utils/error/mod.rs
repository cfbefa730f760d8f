//! Error handling utilities
//!
//! Access queries never fail; errors only surface while loading configuration
//! or parsing role and permission names supplied from outside the crate.

pub mod error;

pub use error::*;
