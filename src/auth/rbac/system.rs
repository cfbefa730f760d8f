//! RBAC system core functionality

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::defaults::role_permissions;
use super::types::{Permission, Role};

/// Immutable role-permission table.
///
/// Built once and shared by reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Permission set per role
    pub(super) roles: HashMap<Role, HashSet<Permission>>,
    /// Returned for roles that have no entry
    pub(super) empty: HashSet<Permission>,
}

/// One row of the access matrix: a permission and every role holding it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatrixRow {
    pub permission: Permission,
    pub roles: Vec<Role>,
}

impl RbacSystem {
    /// Create the RBAC system from the default role table
    pub fn new() -> Self {
        info!("Initializing RBAC system");

        let roles: HashMap<Role, HashSet<Permission>> = Role::all()
            .map(|role| (role, role_permissions(role).iter().copied().collect()))
            .collect();

        for (role, permissions) in &roles {
            debug!("Role {} holds {} permissions", role, permissions.len());
        }

        info!("RBAC system initialized with {} roles", roles.len());
        Self {
            roles,
            empty: HashSet::new(),
        }
    }

    /// Build a system from an explicit table. Roles absent from `roles` hold
    /// no permissions.
    pub fn from_table(roles: HashMap<Role, HashSet<Permission>>) -> Self {
        Self {
            roles,
            empty: HashSet::new(),
        }
    }

    /// List all roles with an entry, in declaration order
    pub fn list_roles(&self) -> Vec<Role> {
        Role::all().filter(|r| self.roles.contains_key(r)).collect()
    }

    /// List the whole permission catalog
    pub fn list_permissions(&self) -> Vec<Permission> {
        Permission::all().collect()
    }

    /// Permission catalog paired with the roles holding each token, in
    /// catalog order
    pub fn access_matrix(&self) -> Vec<MatrixRow> {
        Permission::all()
            .map(|permission| MatrixRow {
                permission,
                roles: self.roles_with_permission(permission),
            })
            .collect()
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::new()
    }
}
