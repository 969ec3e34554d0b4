//! Role → feature allowlist.

use sekolah_core::features::is_admin_feature;
use sekolah_models::{Role, UserProfile};

/// Whether a profile may open a feature.
///
/// Superadmins may open anything. Admins may open only the allowlisted
/// features; unknown names are denied. Every other role is denied.
pub fn can_access_feature(profile: &UserProfile, feature: &str) -> bool {
    match profile.role {
        Role::Superadmin => true,
        Role::Admin => is_admin_feature(feature),
        Role::Teacher | Role::Student | Role::MaterialCoordinator => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sekolah_core::features;
    use sekolah_models::UserId;

    fn profile(role: Role) -> UserProfile {
        UserProfile::new(UserId::new(), role)
    }

    #[test]
    fn test_superadmin_any_feature() {
        let sa = profile(Role::Superadmin);
        assert!(can_access_feature(&sa, features::DASHBOARD));
        assert!(can_access_feature(&sa, "random-feature"));
        assert!(can_access_feature(&sa, ""));
    }

    #[test]
    fn test_admin_allowlist() {
        let admin = profile(Role::Admin);
        for feature in features::ADMIN_FEATURES {
            assert!(can_access_feature(&admin, feature));
        }
        assert!(!can_access_feature(&admin, "random-feature"));
    }

    #[test]
    fn test_other_roles_denied() {
        for role in [Role::Teacher, Role::Student, Role::MaterialCoordinator] {
            assert!(!can_access_feature(&profile(role), features::DASHBOARD));
        }
    }
}
