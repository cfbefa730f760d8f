//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `portal_validators`: Logging and branding validators
//! - `tests`: Test suite for all validators

mod portal_validators;
mod trait_def;

pub use trait_def::Validate;
