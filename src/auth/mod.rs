//! Authorization for the portal
//!
//! Roles come from the session store; this module decides what they may do.
//! Capability checks live in [`rbac`], render-time guards in [`gate`].

pub mod gate;
pub mod rbac;
pub mod session;

pub use gate::{PermissionGate, PermissionRequirement, with_permission};
pub use rbac::{Permission, PermissionCheck, RbacSystem, Resource, Role};
pub use session::{Session, User};
