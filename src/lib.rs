//! # Talentree Portal access model
//!
//! Role-based access control for the Talentree recruitment portal.
//!
//! ## Features
//!
//! - **Closed vocabulary**: five [`Role`]s and a catalog of `resource.action`
//!   [`Permission`] tokens, both plain enums
//! - **Static role table**: an exhaustive map from role to permission set,
//!   built once and shared read-only
//! - **Queries**: has one, has any, has all; missing grants are `false`
//! - **Access gates**: render-time guards and a `with_permission` decorator
//! - **Navigation**: ordered sidebar catalog filtered per role, plus branding
//!
//! ## Quick Start
//!
//! ```rust
//! use talentree_portal::{Permission, PermissionGate, RbacSystem, Role, User};
//!
//! let rbac = RbacSystem::new();
//! assert!(rbac.has_permission(Role::Company, Permission::WorkersInvite));
//!
//! let user = User::new("ana@acme.cl", Role::Guest);
//! let gate = PermissionGate::new(&rbac).permission(Permission::ProcessesEdit);
//! let button: Option<&str> = gate.render_or_default(Some(&user), || Some("Editar"));
//! assert_eq!(button, None);
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod navigation;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    MatrixRow, default_rbac, get_role_permissions, has_all_permissions, has_any_permission,
    has_permission,
};
pub use auth::{
    Permission, PermissionCheck, PermissionGate, PermissionRequirement, RbacSystem, Resource,
    Role, Session, User, with_permission,
};
pub use config::Config;
pub use navigation::{
    Branding, NavigationEntry, can_navigate, get_logo_for_role, get_sections_for_role,
    get_title_for_role,
};
pub use utils::error::{PortalError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, built {})", self.version, self.git_hash, self.build_time)
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
