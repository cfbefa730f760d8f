//! Sidebar branding configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO: &str = "/images/talentree-logo.png";
pub const DEFAULT_ADMIN_TITLE: &str = "Administración Talentree";
pub const DEFAULT_EVALUATOR_TITLE: &str = "Panel Evaluador";
pub const DEFAULT_COMPANY_TITLE: &str = "Mi Empresa";
pub const DEFAULT_WORKER_TITLE: &str = "Mi Perfil";
pub const DEFAULT_UNKNOWN_TITLE: &str = "Talentree";

/// Branding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Brand image shown when no company logo applies
    #[serde(default = "default_logo")]
    pub default_logo: String,
    /// Title shown to Talentree administrators
    #[serde(default = "default_admin_title")]
    pub admin_title: String,
    /// Title shown to evaluators
    #[serde(default = "default_evaluator_title")]
    pub evaluator_title: String,
    /// Company title when the company name is unknown
    #[serde(default = "default_company_title")]
    pub company_fallback: String,
    /// Worker title when the user name is unknown
    #[serde(default = "default_worker_title")]
    pub worker_fallback: String,
    /// Guest title when the company name is unknown
    #[serde(default = "default_company_title")]
    pub guest_fallback: String,
    /// Title for unrecognized roles
    #[serde(default = "default_unknown_title")]
    pub unknown_fallback: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            default_logo: default_logo(),
            admin_title: default_admin_title(),
            evaluator_title: default_evaluator_title(),
            company_fallback: default_company_title(),
            worker_fallback: default_worker_title(),
            guest_fallback: default_company_title(),
            unknown_fallback: default_unknown_title(),
        }
    }
}

impl BrandingConfig {
    /// Merge branding configurations (other takes precedence where it
    /// differs from the defaults)
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = Self::default();
        if other.default_logo != defaults.default_logo {
            self.default_logo = other.default_logo;
        }
        if other.admin_title != defaults.admin_title {
            self.admin_title = other.admin_title;
        }
        if other.evaluator_title != defaults.evaluator_title {
            self.evaluator_title = other.evaluator_title;
        }
        if other.company_fallback != defaults.company_fallback {
            self.company_fallback = other.company_fallback;
        }
        if other.worker_fallback != defaults.worker_fallback {
            self.worker_fallback = other.worker_fallback;
        }
        if other.guest_fallback != defaults.guest_fallback {
            self.guest_fallback = other.guest_fallback;
        }
        if other.unknown_fallback != defaults.unknown_fallback {
            self.unknown_fallback = other.unknown_fallback;
        }
        self
    }
}

fn default_logo() -> String {
    DEFAULT_LOGO.to_string()
}

fn default_admin_title() -> String {
    DEFAULT_ADMIN_TITLE.to_string()
}

fn default_evaluator_title() -> String {
    DEFAULT_EVALUATOR_TITLE.to_string()
}

fn default_company_title() -> String {
    DEFAULT_COMPANY_TITLE.to_string()
}

fn default_worker_title() -> String {
    DEFAULT_WORKER_TITLE.to_string()
}

fn default_unknown_title() -> String {
    DEFAULT_UNKNOWN_TITLE.to_string()
}
