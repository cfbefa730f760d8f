//! Default role-permission table
//!
//! The table is a plain `match` over [`Role`] with no wildcard arm, so adding a
//! role without granting it a permission set is a compile error.

use super::types::{Permission, Role};

const ADMIN_TALENTREE_PERMISSIONS: &[Permission] = &[
    Permission::CompaniesView,
    Permission::CompaniesCreate,
    Permission::CompaniesEdit,
    Permission::CompaniesDelete,
    Permission::ProcessesView,
    Permission::ProcessesCreate,
    Permission::ProcessesEdit,
    Permission::ProcessesDelete,
    Permission::TestsView,
    Permission::TestsCreate,
    Permission::TestsEdit,
    Permission::TestsDelete,
    Permission::TestsAssign,
    Permission::WorkersView,
    Permission::WorkersInvite,
    Permission::WorkersEdit,
    Permission::WorkersDelete,
    Permission::UsersView,
    Permission::UsersCreate,
    Permission::UsersEdit,
    Permission::UsersDelete,
    Permission::ReportsView,
    Permission::ReportsCreate,
    Permission::ReportsApprove,
    Permission::ReportsExport,
    Permission::AuditView,
    Permission::SettingsView,
    Permission::SettingsEdit,
    Permission::ApplicationsView,
    Permission::ApplicationsCreate,
    Permission::CandidatesView,
    Permission::CandidatesEvaluate,
];

const COMPANY_PERMISSIONS: &[Permission] = &[
    Permission::CompaniesView,
    Permission::ProcessesView,
    Permission::ProcessesCreate,
    Permission::ProcessesEdit,
    Permission::TestsView,
    Permission::TestsAssign,
    Permission::WorkersView,
    Permission::WorkersInvite,
    Permission::WorkersEdit,
    Permission::ReportsView,
    Permission::ReportsExport,
    Permission::CandidatesView,
    Permission::SettingsView,
];

const EVALUATOR_PERMISSIONS: &[Permission] = &[
    Permission::ProcessesView,
    Permission::TestsView,
    Permission::CandidatesView,
    Permission::CandidatesEvaluate,
    Permission::ReportsView,
    Permission::ReportsCreate,
];

const WORKER_PERMISSIONS: &[Permission] = &[
    Permission::ProcessesView,
    Permission::TestsView,
    Permission::ApplicationsView,
    Permission::ApplicationsCreate,
];

const GUEST_PERMISSIONS: &[Permission] = &[
    Permission::ProcessesView,
    Permission::CandidatesView,
    Permission::ReportsView,
];

/// Configured permissions for a role
pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::AdminTalentree => ADMIN_TALENTREE_PERMISSIONS,
        Role::Company => COMPANY_PERMISSIONS,
        Role::Evaluator => EVALUATOR_PERMISSIONS,
        Role::Worker => WORKER_PERMISSIONS,
        Role::Guest => GUEST_PERMISSIONS,
    }
}

/// Configured permissions for a role given by wire name.
///
/// Unrecognized names hold no permissions.
pub fn role_permissions_by_name(role_name: &str) -> &'static [Permission] {
    match Role::parse(role_name) {
        Some(role) => role_permissions(role),
        None => &[],
    }
}
