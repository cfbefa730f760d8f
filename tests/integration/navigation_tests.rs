//! Navigation and branding integration tests

#[cfg(test)]
mod tests {
    use crate::common::{UserFactory, is_subsequence};
    use talentree_portal::config::BrandingConfig;
    use talentree_portal::navigation::{
        Branding, NAVIGATION, badge_sections, can_navigate, find_entry, get_logo_for_role,
        get_sections_for_role, get_title_for_role,
    };
    use talentree_portal::{NavigationEntry, Role};

    fn paths(entries: &[&NavigationEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.path).collect()
    }

    #[test]
    fn test_sections_are_ordered_subsequence_of_catalog() {
        let catalog: Vec<&NavigationEntry> = NAVIGATION.iter().collect();
        for role in Role::all() {
            let sections = get_sections_for_role(role);
            assert!(!sections.is_empty(), "{role} sees nothing");
            assert!(is_subsequence(&sections, &catalog));
            assert!(sections.iter().all(|entry| entry.roles.contains(&role)));
        }
    }

    #[test]
    fn test_sections_are_exactly_the_tagged_entries() {
        for role in Role::all() {
            let expected = NAVIGATION.iter().filter(|e| e.roles.contains(&role)).count();
            assert_eq!(get_sections_for_role(role).len(), expected);
        }
    }

    #[test]
    fn test_worker_sidebar() {
        assert_eq!(
            paths(&get_sections_for_role(Role::Worker)),
            vec![
                "/dashboard",
                "/worker/applications",
                "/worker/tests",
                "/notifications",
                "/worker/profile",
            ]
        );
    }

    #[test]
    fn test_guest_sidebar_has_no_dashboard_or_notifications() {
        let guest = paths(&get_sections_for_role(Role::Guest));
        assert_eq!(guest, vec!["/company/processes", "/candidates", "/reports"]);
        assert!(badge_sections(Role::Guest).is_empty());
    }

    #[test]
    fn test_same_label_different_routes() {
        let route_for = |role: Role| {
            get_sections_for_role(role)
                .into_iter()
                .find(|entry| entry.label == "Procesos")
                .map(|entry| entry.path)
        };

        assert_eq!(route_for(Role::AdminTalentree), Some("/admin/processes"));
        assert_eq!(route_for(Role::Company), Some("/company/processes"));
        assert_eq!(route_for(Role::Evaluator), Some("/evaluator/processes"));
        assert_eq!(route_for(Role::Worker), None);
    }

    #[test]
    fn test_route_access() {
        assert!(can_navigate(Role::AdminTalentree, "/admin/audit"));
        assert!(!can_navigate(Role::Company, "/admin/audit"));
        assert!(can_navigate(Role::Company, "/company/processes/12/candidates"));
        assert!(!can_navigate(Role::Worker, "/workers"));
        assert!(can_navigate(Role::Worker, "/worker/tests/3"));
        assert!(!can_navigate(Role::Guest, "/"));
    }

    #[test]
    fn test_find_entry_prefers_longest_route() {
        let entry = find_entry(Role::Worker, "/worker/tests/3").unwrap();
        assert_eq!(entry.path, "/worker/tests");
        assert_eq!(entry.label, "Mis Pruebas");

        assert!(find_entry(Role::Company, "/testsuite").is_none());
    }

    #[test]
    fn test_titles_for_fixture_users() {
        let company = UserFactory::company();
        assert_eq!(
            get_title_for_role(company.role, company.company_name.as_deref(), company.name.as_deref()),
            "Acme Corp"
        );

        let worker = UserFactory::worker();
        assert_eq!(
            get_title_for_role(worker.role, worker.company_name.as_deref(), worker.name.as_deref()),
            "Juan Pérez"
        );

        assert_eq!(get_title_for_role(Role::Company, None, None), "Mi Empresa");
        assert_eq!(get_title_for_role(Role::Evaluator, None, None), "Panel Evaluador");
    }

    #[test]
    fn test_logos_for_fixture_users() {
        let company = UserFactory::company();
        assert_eq!(
            get_logo_for_role(company.role, company.company_logo.as_deref()),
            "https://cdn.acme.test/logo.png"
        );

        assert_eq!(
            get_logo_for_role(Role::Worker, Some("http://logo.png")),
            "/images/talentree-logo.png"
        );
        assert_eq!(
            get_logo_for_role(Role::AdminTalentree, Some("http://logo.png")),
            "/images/talentree-logo.png"
        );
    }

    #[test]
    fn test_configured_branding() {
        let branding = Branding::new(BrandingConfig {
            default_logo: "/static/talentree.svg".to_string(),
            company_fallback: "Empresa".to_string(),
            ..BrandingConfig::default()
        });

        assert_eq!(branding.logo_for_role(Role::Guest, None), "/static/talentree.svg");
        assert_eq!(branding.title_for_role(Role::Company, Some(""), None), "Empresa");
        assert_eq!(branding.title_for_role_name("nobody", None, None), "Talentree");
    }
}
