//! Render-time access gate
//!
//! A [`PermissionGate`] decides whether protected content is produced for the
//! current user. Content is anything a closure can build; the gate never
//! inspects it. Without a user, or without a requirement, the fallback wins.

use crate::auth::rbac::{Permission, RbacSystem, Role};
use crate::auth::session::User;
use tracing::trace;

/// What a gate requires of the current user's role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionRequirement {
    /// One permission
    Single(Permission),
    /// At least one of the permissions; an empty list is denied
    Any(Vec<Permission>),
    /// Every permission; an empty list is satisfied
    All(Vec<Permission>),
}

impl PermissionRequirement {
    /// Evaluate the requirement for `role`
    pub fn is_satisfied_by(&self, rbac: &RbacSystem, role: Role) -> bool {
        match self {
            PermissionRequirement::Single(permission) => rbac.has_permission(role, *permission),
            PermissionRequirement::Any(permissions) => rbac.has_any_permission(role, permissions),
            PermissionRequirement::All(permissions) => rbac.has_all_permissions(role, permissions),
        }
    }
}

impl From<Permission> for PermissionRequirement {
    fn from(permission: Permission) -> Self {
        PermissionRequirement::Single(permission)
    }
}

// Lists passed without further qualification are OR-combined.
impl From<Vec<Permission>> for PermissionRequirement {
    fn from(permissions: Vec<Permission>) -> Self {
        PermissionRequirement::Any(permissions)
    }
}

impl From<&[Permission]> for PermissionRequirement {
    fn from(permissions: &[Permission]) -> Self {
        PermissionRequirement::Any(permissions.to_vec())
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionRequirement {
    fn from(permissions: [Permission; N]) -> Self {
        PermissionRequirement::Any(permissions.to_vec())
    }
}

/// Access gate over a single permission, an "any" list or an "all" list.
///
/// When several are supplied only one is evaluated, in the order single,
/// any, all.
#[derive(Debug, Clone)]
pub struct PermissionGate<'a> {
    rbac: &'a RbacSystem,
    permission: Option<Permission>,
    any_of: Option<Vec<Permission>>,
    all_of: Option<Vec<Permission>>,
}

impl<'a> PermissionGate<'a> {
    /// Gate with no requirement yet; it denies until one is set
    pub fn new(rbac: &'a RbacSystem) -> Self {
        Self {
            rbac,
            permission: None,
            any_of: None,
            all_of: None,
        }
    }

    /// Gate for an already-built requirement
    pub fn from_requirement(rbac: &'a RbacSystem, requirement: PermissionRequirement) -> Self {
        let gate = Self::new(rbac);
        match requirement {
            PermissionRequirement::Single(permission) => gate.permission(permission),
            PermissionRequirement::Any(permissions) => gate.any_of(permissions),
            PermissionRequirement::All(permissions) => gate.all_of(permissions),
        }
    }

    /// Require a single permission
    pub fn permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Require at least one of `permissions`
    pub fn any_of(mut self, permissions: impl Into<Vec<Permission>>) -> Self {
        self.any_of = Some(permissions.into());
        self
    }

    /// Require all of `permissions`
    pub fn all_of(mut self, permissions: impl Into<Vec<Permission>>) -> Self {
        self.all_of = Some(permissions.into());
        self
    }

    /// The requirement that will actually be evaluated
    pub fn requirement(&self) -> Option<PermissionRequirement> {
        if let Some(permission) = self.permission {
            Some(PermissionRequirement::Single(permission))
        } else if let Some(any_of) = &self.any_of {
            Some(PermissionRequirement::Any(any_of.clone()))
        } else {
            self.all_of.clone().map(PermissionRequirement::All)
        }
    }

    /// Whether `user` passes the gate
    pub fn allows(&self, user: Option<&User>) -> bool {
        let Some(user) = user else {
            trace!("Access gate denied: no authenticated user");
            return false;
        };

        let role = user.role;
        let granted = if let Some(permission) = self.permission {
            self.rbac.has_permission(role, permission)
        } else if let Some(any_of) = &self.any_of {
            self.rbac.has_any_permission(role, any_of)
        } else if let Some(all_of) = &self.all_of {
            self.rbac.has_all_permissions(role, all_of)
        } else {
            false
        };

        if !granted {
            trace!(
                "Access gate denied for role {}: requirement {:?}",
                role,
                self.requirement()
            );
        }
        granted
    }

    /// Produce `children` when the gate passes, `fallback` otherwise
    pub fn render<R>(
        &self,
        user: Option<&User>,
        children: impl FnOnce() -> R,
        fallback: impl FnOnce() -> R,
    ) -> R {
        if self.allows(user) {
            children()
        } else {
            fallback()
        }
    }

    /// Produce `children` when the gate passes, `R::default()` otherwise
    pub fn render_or_default<R: Default>(
        &self,
        user: Option<&User>,
        children: impl FnOnce() -> R,
    ) -> R {
        self.render(user, children, R::default)
    }
}

/// Wrap a render function so it only produces output for users meeting
/// `requirement`; everyone else gets `R::default()`.
///
/// A single [`Permission`] is required as-is, a list is OR-combined.
pub fn with_permission<'a, P, R, F>(
    rbac: &'a RbacSystem,
    requirement: impl Into<PermissionRequirement>,
    render: F,
) -> impl Fn(Option<&User>, P) -> R
where
    F: Fn(P) -> R,
    R: Default,
{
    let gate = PermissionGate::from_requirement(rbac, requirement.into());
    move |user: Option<&User>, props: P| gate.render_or_default(user, || render(props))
}
