//! Role-Based Access Control (RBAC) system
//!
//! A closed set of roles, a closed catalog of `resource.action` permission
//! tokens and a static table mapping one onto the other. Every query is a pure
//! lookup; a missing grant is `false`, never an error.

mod defaults;
mod permissions;
mod roles;
mod system;
mod types;

use once_cell::sync::Lazy;
use std::collections::HashSet;

// Re-export public types and structs
pub use defaults::{role_permissions, role_permissions_by_name};
pub use system::{MatrixRow, RbacSystem};
pub use types::{Permission, PermissionCheck, Resource, Role};

static DEFAULT_RBAC: Lazy<RbacSystem> = Lazy::new(RbacSystem::new);

/// Process-wide RBAC system built from the default table
pub fn default_rbac() -> &'static RbacSystem {
    &DEFAULT_RBAC
}

/// Configured permission set for `role`
pub fn get_role_permissions(role: Role) -> &'static HashSet<Permission> {
    DEFAULT_RBAC.get_role_permissions(role)
}

/// Whether `role` holds `permission`
pub fn has_permission(role: Role, permission: Permission) -> bool {
    DEFAULT_RBAC.has_permission(role, permission)
}

/// Whether `role` holds any of `permissions`; false for an empty list
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    DEFAULT_RBAC.has_any_permission(role, permissions)
}

/// Whether `role` holds all of `permissions`; true for an empty list
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    DEFAULT_RBAC.has_all_permissions(role, permissions)
}
