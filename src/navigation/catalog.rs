//! Sidebar navigation catalog
//!
//! A flat, ordered list of menu entries tagged with the roles allowed to see
//! them. The same label can point at different routes for different roles, so
//! entries are never keyed by path. Visibility here is coarse and independent
//! of the capability table in [`crate::auth::rbac`].

use crate::auth::rbac::Role;
use serde::Serialize;

const ALL_SIGNED_IN: &[Role] = &[
    Role::AdminTalentree,
    Role::Company,
    Role::Evaluator,
    Role::Worker,
];

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Route path handed to the router
    pub path: &'static str,
    /// Display label
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Roles that see this entry; never empty
    pub roles: &'static [Role],
    /// Whether the entry shows the unread notification badge
    pub notification_badge: bool,
}

impl NavigationEntry {
    const fn new(
        path: &'static str,
        label: &'static str,
        icon: &'static str,
        roles: &'static [Role],
    ) -> Self {
        Self {
            path,
            label,
            icon,
            roles,
            notification_badge: false,
        }
    }

    const fn with_badge(mut self) -> Self {
        self.notification_badge = true;
        self
    }

    /// Whether `role` sees this entry
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether `path` is this entry's route or nested under it
    pub fn matches_path(&self, path: &str) -> bool {
        match path.strip_prefix(self.path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Full navigation catalog in display order
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry::new("/dashboard", "Inicio", "LayoutDashboard", ALL_SIGNED_IN),
    NavigationEntry::new(
        "/admin/companies",
        "Empresas",
        "Building2",
        &[Role::AdminTalentree],
    ),
    NavigationEntry::new(
        "/admin/processes",
        "Procesos",
        "Briefcase",
        &[Role::AdminTalentree],
    ),
    NavigationEntry::new(
        "/company/processes",
        "Procesos",
        "Briefcase",
        &[Role::Company, Role::Guest],
    ),
    NavigationEntry::new(
        "/evaluator/processes",
        "Procesos",
        "Briefcase",
        &[Role::Evaluator],
    ),
    NavigationEntry::new(
        "/worker/applications",
        "Mis Postulaciones",
        "Send",
        &[Role::Worker],
    ),
    NavigationEntry::new(
        "/tests",
        "Pruebas",
        "ClipboardList",
        &[Role::AdminTalentree, Role::Company],
    ),
    NavigationEntry::new("/worker/tests", "Mis Pruebas", "ClipboardList", &[Role::Worker]),
    NavigationEntry::new(
        "/video-requirements",
        "Requisitos de Video",
        "Video",
        &[Role::AdminTalentree, Role::Company],
    ),
    NavigationEntry::new(
        "/candidates",
        "Candidatos",
        "UserSearch",
        &[Role::Company, Role::Evaluator, Role::Guest],
    ),
    NavigationEntry::new(
        "/workers",
        "Trabajadores",
        "Users",
        &[Role::AdminTalentree, Role::Company],
    ),
    NavigationEntry::new(
        "/reports",
        "Informes",
        "FileText",
        &[Role::AdminTalentree, Role::Company, Role::Evaluator, Role::Guest],
    ),
    NavigationEntry::new("/notifications", "Notificaciones", "Bell", ALL_SIGNED_IN).with_badge(),
    NavigationEntry::new("/admin/users", "Usuarios", "UserCog", &[Role::AdminTalentree]),
    NavigationEntry::new("/admin/audit", "Auditoría", "ShieldCheck", &[Role::AdminTalentree]),
    NavigationEntry::new(
        "/settings",
        "Configuración",
        "Settings",
        &[Role::AdminTalentree, Role::Company],
    ),
    NavigationEntry::new("/worker/profile", "Mi Perfil", "UserCircle", &[Role::Worker]),
];

/// Entries visible to `role`, in catalog order
pub fn get_sections_for_role(role: Role) -> Vec<&'static NavigationEntry> {
    NAVIGATION.iter().filter(|entry| entry.is_visible_to(role)).collect()
}

/// Entries visible to `role` that carry the notification badge
pub fn badge_sections(role: Role) -> Vec<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| entry.notification_badge && entry.is_visible_to(role))
        .collect()
}

/// The entry visible to `role` whose route covers `path`.
///
/// The longest matching route wins so nested routes resolve to the most
/// specific entry.
pub fn find_entry(role: Role, path: &str) -> Option<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| entry.is_visible_to(role) && entry.matches_path(path))
        .max_by_key(|entry| entry.path.len())
}

/// Whether `role` may navigate to `path`. Route visibility only; actions on
/// the page are gated separately.
pub fn can_navigate(role: Role, path: &str) -> bool {
    find_entry(role, path).is_some()
}
