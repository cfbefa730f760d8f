//! RBAC type definitions

use crate::utils::error::PortalError;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Portal role held by an authenticated principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Talentree platform administrator
    AdminTalentree,
    /// Hiring company
    Company,
    /// Evaluator reviewing candidates and reports
    Evaluator,
    /// Worker applying to selection processes
    Worker,
    /// Guest with read-only access to a company's processes
    Guest,
}

impl Role {
    /// All roles in declaration order
    pub fn all() -> impl Iterator<Item = Role> {
        Role::iter()
    }

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AdminTalentree => "admin_talentree",
            Role::Company => "company",
            Role::Evaluator => "evaluator",
            Role::Worker => "worker",
            Role::Guest => "guest",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin_talentree" => Some(Role::AdminTalentree),
            "company" => Some(Role::Company),
            "evaluator" => Some(Role::Evaluator),
            "worker" => Some(Role::Worker),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| PortalError::UnknownRole(s.to_string()))
    }
}

/// Resource a permission acts upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    Companies,
    Processes,
    Tests,
    Workers,
    Users,
    Reports,
    Audit,
    Settings,
    Applications,
    Candidates,
}

impl Resource {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// Capability token. Each variant names one action on one resource and
/// serializes as `resource.action`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, AsRefStr, EnumIter,
)]
#[serde(into = "String", try_from = "String")]
pub enum Permission {
    #[strum(serialize = "companies.view")]
    CompaniesView,
    #[strum(serialize = "companies.create")]
    CompaniesCreate,
    #[strum(serialize = "companies.edit")]
    CompaniesEdit,
    #[strum(serialize = "companies.delete")]
    CompaniesDelete,

    #[strum(serialize = "processes.view")]
    ProcessesView,
    #[strum(serialize = "processes.create")]
    ProcessesCreate,
    #[strum(serialize = "processes.edit")]
    ProcessesEdit,
    #[strum(serialize = "processes.delete")]
    ProcessesDelete,

    #[strum(serialize = "tests.view")]
    TestsView,
    #[strum(serialize = "tests.create")]
    TestsCreate,
    #[strum(serialize = "tests.edit")]
    TestsEdit,
    #[strum(serialize = "tests.delete")]
    TestsDelete,
    #[strum(serialize = "tests.assign")]
    TestsAssign,

    #[strum(serialize = "workers.view")]
    WorkersView,
    #[strum(serialize = "workers.invite")]
    WorkersInvite,
    #[strum(serialize = "workers.edit")]
    WorkersEdit,
    #[strum(serialize = "workers.delete")]
    WorkersDelete,

    #[strum(serialize = "users.view")]
    UsersView,
    #[strum(serialize = "users.create")]
    UsersCreate,
    #[strum(serialize = "users.edit")]
    UsersEdit,
    #[strum(serialize = "users.delete")]
    UsersDelete,

    #[strum(serialize = "reports.view")]
    ReportsView,
    #[strum(serialize = "reports.create")]
    ReportsCreate,
    #[strum(serialize = "reports.approve")]
    ReportsApprove,
    #[strum(serialize = "reports.export")]
    ReportsExport,

    #[strum(serialize = "audit.view")]
    AuditView,

    #[strum(serialize = "settings.view")]
    SettingsView,
    #[strum(serialize = "settings.edit")]
    SettingsEdit,

    #[strum(serialize = "applications.view")]
    ApplicationsView,
    #[strum(serialize = "applications.create")]
    ApplicationsCreate,

    #[strum(serialize = "candidates.view")]
    CandidatesView,
    #[strum(serialize = "candidates.evaluate")]
    CandidatesEvaluate,
}

impl Permission {
    /// Every permission in the catalog, in declaration order
    pub fn all() -> impl Iterator<Item = Permission> {
        Permission::iter()
    }

    /// The `resource.action` token
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a `resource.action` token
    pub fn parse(s: &str) -> Option<Self> {
        Permission::iter().find(|p| p.as_str() == s)
    }

    /// Action half of the token
    pub fn action(&self) -> &str {
        let token = self.as_str();
        token.split_once('.').map_or(token, |(_, action)| action)
    }

    /// Resource this permission acts upon
    pub fn resource(&self) -> Resource {
        match self {
            Permission::CompaniesView
            | Permission::CompaniesCreate
            | Permission::CompaniesEdit
            | Permission::CompaniesDelete => Resource::Companies,
            Permission::ProcessesView
            | Permission::ProcessesCreate
            | Permission::ProcessesEdit
            | Permission::ProcessesDelete => Resource::Processes,
            Permission::TestsView
            | Permission::TestsCreate
            | Permission::TestsEdit
            | Permission::TestsDelete
            | Permission::TestsAssign => Resource::Tests,
            Permission::WorkersView
            | Permission::WorkersInvite
            | Permission::WorkersEdit
            | Permission::WorkersDelete => Resource::Workers,
            Permission::UsersView
            | Permission::UsersCreate
            | Permission::UsersEdit
            | Permission::UsersDelete => Resource::Users,
            Permission::ReportsView
            | Permission::ReportsCreate
            | Permission::ReportsApprove
            | Permission::ReportsExport => Resource::Reports,
            Permission::AuditView => Resource::Audit,
            Permission::SettingsView | Permission::SettingsEdit => Resource::Settings,
            Permission::ApplicationsView | Permission::ApplicationsCreate => {
                Resource::Applications
            }
            Permission::CandidatesView | Permission::CandidatesEvaluate => Resource::Candidates,
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s).ok_or_else(|| PortalError::UnknownPermission(s.to_string()))
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = PortalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role the check was evaluated for, if it was recognized
    pub role: Option<Role>,
    /// Permission that was checked
    pub permission: Permission,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
