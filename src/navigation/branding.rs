//! Role-dependent sidebar branding: logo and section title

use crate::auth::rbac::Role;
use crate::config::BrandingConfig;
use once_cell::sync::Lazy;

static DEFAULT_BRANDING: Lazy<Branding> = Lazy::new(Branding::default);

/// Sidebar branding derived from [`BrandingConfig`]
#[derive(Debug, Clone, Default)]
pub struct Branding {
    config: BrandingConfig,
}

// Empty strings count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Branding {
    pub fn new(config: BrandingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BrandingConfig {
        &self.config
    }

    /// Logo for `role`. Company and guest users get their company logo when
    /// one is set; everyone else always gets the default brand image.
    pub fn logo_for_role<'a>(&'a self, role: Role, company_logo: Option<&'a str>) -> &'a str {
        match role {
            Role::Company | Role::Guest => {
                present(company_logo).unwrap_or(self.config.default_logo.as_str())
            }
            Role::AdminTalentree | Role::Evaluator | Role::Worker => &self.config.default_logo,
        }
    }

    /// Logo for a role given by wire name; unknown roles get the default
    pub fn logo_for_role_name<'a>(
        &'a self,
        role_name: &str,
        company_logo: Option<&'a str>,
    ) -> &'a str {
        match Role::parse(role_name) {
            Some(role) => self.logo_for_role(role, company_logo),
            None => &self.config.default_logo,
        }
    }

    /// Section title for `role`
    pub fn title_for_role<'a>(
        &'a self,
        role: Role,
        company_name: Option<&'a str>,
        user_name: Option<&'a str>,
    ) -> &'a str {
        match role {
            Role::AdminTalentree => &self.config.admin_title,
            Role::Company => present(company_name).unwrap_or(self.config.company_fallback.as_str()),
            Role::Evaluator => &self.config.evaluator_title,
            Role::Worker => present(user_name).unwrap_or(self.config.worker_fallback.as_str()),
            Role::Guest => present(company_name).unwrap_or(self.config.guest_fallback.as_str()),
        }
    }

    /// Section title for a role given by wire name; unknown roles get the
    /// generic fallback
    pub fn title_for_role_name<'a>(
        &'a self,
        role_name: &str,
        company_name: Option<&'a str>,
        user_name: Option<&'a str>,
    ) -> &'a str {
        match Role::parse(role_name) {
            Some(role) => self.title_for_role(role, company_name, user_name),
            None => &self.config.unknown_fallback,
        }
    }
}

/// Logo for `role` using the default branding
pub fn get_logo_for_role(role: Role, company_logo: Option<&str>) -> &str {
    DEFAULT_BRANDING.logo_for_role(role, company_logo)
}

/// Section title for `role` using the default branding
pub fn get_title_for_role<'a>(
    role: Role,
    company_name: Option<&'a str>,
    user_name: Option<&'a str>,
) -> &'a str {
    DEFAULT_BRANDING.title_for_role(role, company_name, user_name)
}
