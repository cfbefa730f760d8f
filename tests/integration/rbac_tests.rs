//! Role table integration tests
//!
//! Permission queries through the shared default table and through
//! explicitly built systems.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use talentree_portal::auth::rbac::role_permissions;
    use talentree_portal::{
        Permission, PortalError, RbacSystem, Role, default_rbac, get_role_permissions,
        has_all_permissions, has_any_permission, has_permission,
    };

    // ==================== Scenarios ====================

    #[test]
    fn test_company_can_invite_workers_but_not_delete_processes() {
        assert!(has_permission(Role::Company, Permission::WorkersInvite));
        assert!(!has_permission(Role::Company, Permission::ProcessesDelete));
    }

    #[test]
    fn test_guest_cannot_edit_or_delete_processes() {
        assert!(!has_any_permission(
            Role::Guest,
            &[Permission::ProcessesEdit, Permission::ProcessesDelete]
        ));
    }

    #[test]
    fn test_admin_can_approve_reports_and_view_audit() {
        assert!(has_all_permissions(
            Role::AdminTalentree,
            &[Permission::ReportsApprove, Permission::AuditView]
        ));
    }

    // ==================== Properties ====================

    #[test]
    fn test_has_permission_matches_role_set() {
        for role in Role::all() {
            let granted = get_role_permissions(role);
            for permission in Permission::all() {
                assert_eq!(
                    has_permission(role, permission),
                    granted.contains(&permission),
                    "{role} / {permission}"
                );
            }
        }
    }

    #[test]
    fn test_quantifiers_match_iterator_semantics() {
        let lists: [&[Permission]; 4] = [
            &[],
            &[Permission::ReportsView],
            &[Permission::ReportsView, Permission::AuditView],
            &[
                Permission::ProcessesView,
                Permission::TestsView,
                Permission::ApplicationsCreate,
            ],
        ];

        for role in Role::all() {
            for list in lists {
                let expected_any = list.iter().any(|p| has_permission(role, *p));
                let expected_all = list.iter().all(|p| has_permission(role, *p));
                assert_eq!(has_any_permission(role, list), expected_any);
                assert_eq!(has_all_permissions(role, list), expected_all);
            }
        }
    }

    #[test]
    fn test_empty_list_asymmetry() {
        for role in Role::all() {
            assert!(!has_any_permission(role, &[]));
            assert!(has_all_permissions(role, &[]));
        }
    }

    #[test]
    fn test_every_role_has_a_table_entry() {
        let rbac = default_rbac();
        assert_eq!(rbac.list_roles(), Role::all().collect::<Vec<_>>());
        for role in Role::all() {
            assert_eq!(
                rbac.get_role_permissions(role).len(),
                role_permissions(role).len()
            );
        }
    }

    #[test]
    fn test_worker_holds_only_own_applications() {
        assert_eq!(
            default_rbac().sorted_role_permissions(Role::Worker),
            vec![
                Permission::ProcessesView,
                Permission::TestsView,
                Permission::ApplicationsView,
                Permission::ApplicationsCreate,
            ]
        );
    }

    // ==================== Unknown roles ====================

    #[test]
    fn test_unknown_role_name_is_permission_less() {
        let rbac = RbacSystem::new();
        for name in ["", "root", "Admin_Talentree", "superadmin"] {
            assert!(rbac.permissions_for_role_name(name).is_empty());
            assert!(!rbac.has_permission_for_role_name(name, Permission::ProcessesView));

            let check = rbac.check_permission_for_role_name(name, Permission::ProcessesView);
            assert!(!check.granted);
            assert!(check.role.is_none());
        }
    }

    #[test]
    fn test_known_role_name_matches_enum() {
        let rbac = RbacSystem::new();
        assert!(rbac.has_permission_for_role_name("company", Permission::WorkersInvite));
        assert!(!rbac.has_permission_for_role_name("guest", Permission::ProcessesEdit));
    }

    #[test]
    fn test_partial_table_fails_closed() {
        let mut table = HashMap::new();
        table.insert(
            Role::Company,
            HashSet::from([Permission::ProcessesView, Permission::ReportsView]),
        );
        let rbac = RbacSystem::from_table(table);

        assert!(rbac.has_permission(Role::Company, Permission::ReportsView));
        assert!(!rbac.has_permission(Role::AdminTalentree, Permission::ReportsView));
        assert!(!rbac.has_any_permission(Role::Worker, &[Permission::ProcessesView]));
        assert!(rbac.has_all_permissions(Role::Worker, &[]));
        assert_eq!(rbac.list_roles(), vec![Role::Company]);
    }

    // ==================== Parsing and reports ====================

    #[test]
    fn test_parse_errors_name_the_input() {
        let err = "recruiter".parse::<Role>().unwrap_err();
        assert!(matches!(err, PortalError::UnknownRole(ref name) if name == "recruiter"));

        let err = "reports.publish".parse::<Permission>().unwrap_err();
        assert!(matches!(err, PortalError::UnknownPermission(_)));
    }

    #[test]
    fn test_access_matrix_covers_catalog() {
        let matrix = default_rbac().access_matrix();
        assert_eq!(matrix.len(), Permission::all().count());

        let audit = matrix
            .iter()
            .find(|row| row.permission == Permission::AuditView)
            .unwrap();
        assert_eq!(audit.roles, vec![Role::AdminTalentree]);

        let processes = matrix
            .iter()
            .find(|row| row.permission == Permission::ProcessesView)
            .unwrap();
        assert_eq!(processes.roles, Role::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_detailed_check_serializes_wire_names() {
        let check = default_rbac().check_permission_detailed(Role::Guest, Permission::ReportsApprove);
        let value = serde_json::to_value(&check).unwrap();

        assert_eq!(value["granted"], false);
        assert_eq!(value["role"], "guest");
        assert_eq!(value["permission"], "reports.approve");
        assert_eq!(value["denial_reason"], "Missing permission: reports.approve");
    }
}
