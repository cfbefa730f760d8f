//! Role lookup methods

use std::collections::HashSet;

use super::system::RbacSystem;
use super::types::{Permission, Role};

impl RbacSystem {
    /// Configured permission set for a role, empty if the role has no entry
    pub fn get_role_permissions(&self, role: Role) -> &HashSet<Permission> {
        self.roles.get(&role).unwrap_or(&self.empty)
    }

    /// Permission set for a role given by wire name.
    ///
    /// Unrecognized names are treated as permission-less.
    pub fn permissions_for_role_name(&self, role_name: &str) -> &HashSet<Permission> {
        match Role::parse(role_name) {
            Some(role) => self.get_role_permissions(role),
            None => &self.empty,
        }
    }

    /// Roles holding `permission`, in declaration order
    pub fn roles_with_permission(&self, permission: Permission) -> Vec<Role> {
        Role::all()
            .filter(|role| self.get_role_permissions(*role).contains(&permission))
            .collect()
    }

    /// Sorted permission list for a role
    pub fn sorted_role_permissions(&self, role: Role) -> Vec<Permission> {
        let mut permissions: Vec<Permission> =
            self.get_role_permissions(role).iter().copied().collect();
        permissions.sort();
        permissions
    }
}
