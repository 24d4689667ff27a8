//! Role-aware navigation entries for the sidebar.

use api::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/admin/dashboard" },
    NavItem { label: "Tenants", path: "/admin/tenants" },
    NavItem { label: "Plans", path: "/admin/plans" },
];

const MEMBER_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/dashboard" },
    NavItem { label: "Plans", path: "/plans" },
    NavItem { label: "Users", path: "/users" },
    NavItem { label: "Billing", path: "/billing" },
    NavItem { label: "Settings", path: "/settings" },
];

/// Entries shown to `user`: system administrators get the admin console,
/// everyone else the tenant views.
pub fn nav_items(user: &User) -> &'static [NavItem] {
    if user.is_admin() {
        ADMIN_ITEMS
    } else {
        MEMBER_ITEMS
    }
}

/// Whether `item` is the active entry for `current` path.
pub fn is_active(item: &NavItem, current: &str) -> bool {
    current == item.path || current.starts_with(&format!("{}/", item.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    fn user(role: Role) -> User {
        User {
            id: 1,
            email: "a@b.com".into(),
            first_name: String::new(),
            last_name: String::new(),
            role,
            is_tenant_admin: role == Role::TenantAdmin,
            tenant_id: None,
            tenant_name: None,
            phone_number: None,
        }
    }

    #[test]
    fn test_admin_navigation() {
        let labels: Vec<_> = nav_items(&user(Role::Admin)).iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Dashboard", "Tenants", "Plans"]);
        assert_eq!(nav_items(&user(Role::Admin))[0].path, "/admin/dashboard");
    }

    #[test]
    fn test_member_navigation() {
        for role in [Role::User, Role::TenantAdmin] {
            let paths: Vec<_> = nav_items(&user(role)).iter().map(|i| i.path).collect();
            assert_eq!(
                paths,
                ["/dashboard", "/plans", "/users", "/billing", "/settings"]
            );
        }
    }

    #[test]
    fn test_active_matching() {
        let plans = NavItem { label: "Plans", path: "/plans" };
        assert!(is_active(&plans, "/plans"));
        assert!(is_active(&plans, "/plans/4"));
        assert!(!is_active(&plans, "/plansx"));
        assert!(!is_active(&plans, "/admin/plans"));
    }
}
