//! Permission checking methods

use tracing::trace;

use super::system::RbacSystem;
use super::types::{Permission, PermissionCheck, Role};

impl RbacSystem {
    /// Check whether `role` holds `permission`
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.get_role_permissions(role).contains(&permission)
    }

    /// Check whether `role` holds at least one of `permissions`.
    ///
    /// An empty list is denied.
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(role, *p))
    }

    /// Check whether `role` holds every one of `permissions`.
    ///
    /// An empty list is trivially satisfied.
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(role, *p))
    }

    /// Permission check for a role given by wire name; unknown names are denied
    pub fn has_permission_for_role_name(&self, role_name: &str, permission: Permission) -> bool {
        match Role::parse(role_name) {
            Some(role) => self.has_permission(role, permission),
            None => {
                trace!("Denying {} to unrecognized role {:?}", permission, role_name);
                false
            }
        }
    }

    /// Detailed permission check
    pub fn check_permission_detailed(&self, role: Role, permission: Permission) -> PermissionCheck {
        if self.has_permission(role, permission) {
            PermissionCheck {
                granted: true,
                role: Some(role),
                permission,
                denial_reason: None,
            }
        } else {
            trace!("Role {} lacks {}", role, permission);
            PermissionCheck {
                granted: false,
                role: Some(role),
                permission,
                denial_reason: Some(format!("Missing permission: {}", permission)),
            }
        }
    }

    /// Detailed permission check for a role given by wire name
    pub fn check_permission_for_role_name(
        &self,
        role_name: &str,
        permission: Permission,
    ) -> PermissionCheck {
        match Role::parse(role_name) {
            Some(role) => self.check_permission_detailed(role, permission),
            None => PermissionCheck {
                granted: false,
                role: None,
                permission,
                denial_reason: Some(format!("Unknown role: {}", role_name)),
            },
        }
    }
}
