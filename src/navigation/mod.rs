//! Role-aware navigation
//!
//! Which sidebar entries a role sees, plus the logo and title shown above
//! them. Nothing here checks capabilities; a visible route may still hide
//! individual actions behind a [`crate::auth::PermissionGate`].

pub mod branding;
pub mod catalog;

pub use branding::{Branding, get_logo_for_role, get_title_for_role};
pub use catalog::{
    NAVIGATION, NavigationEntry, badge_sections, can_navigate, find_entry, get_sections_for_role,
};
