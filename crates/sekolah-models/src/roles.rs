//! User roles.
//!
//! Roles form a closed set. Every decision function matches on [`Role`]
//! exhaustively, so a new role cannot slip through any check without the
//! compiler pointing at it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role slugs as stored on profiles.
pub mod slugs {
    pub const SUPERADMIN: &str = "superadmin";
    pub const ADMIN: &str = "admin";
    pub const TEACHER: &str = "teacher";
    pub const STUDENT: &str = "student";
    pub const MATERIAL_COORDINATOR: &str = "material_coordinator";
}

/// The role a profile acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unrestricted access to everything.
    Superadmin,
    /// Organisation admin, scoped to a daerah, desa or kelompok.
    Admin,
    /// Teacher, scoped to a kelompok or broader, or to assigned classes only.
    Teacher,
    Student,
    /// Curates learning materials; no organisational authority.
    MaterialCoordinator,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Superadmin,
        Role::Admin,
        Role::Teacher,
        Role::Student,
        Role::MaterialCoordinator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => slugs::SUPERADMIN,
            Role::Admin => slugs::ADMIN,
            Role::Teacher => slugs::TEACHER,
            Role::Student => slugs::STUDENT,
            Role::MaterialCoordinator => slugs::MATERIAL_COORDINATOR,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role slug is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            slugs::SUPERADMIN => Ok(Role::Superadmin),
            slugs::ADMIN => Ok(Role::Admin),
            slugs::TEACHER => Ok(Role::Teacher),
            slugs::STUDENT => Ok(Role::Student),
            slugs::MATERIAL_COORDINATOR => Ok(Role::MaterialCoordinator),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip_for_every_role() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert_eq!(
            "system_admin".parse::<Role>(),
            Err(UnknownRole("system_admin".to_string()))
        );
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::MaterialCoordinator).unwrap();
        assert_eq!(json, r#""material_coordinator""#);

        let role: Role = serde_json::from_str(r#""superadmin""#).unwrap();
        assert_eq!(role, Role::Superadmin);
    }

    #[test]
    fn test_serde_rejects_unknown_role() {
        let result: Result<Role, _> = serde_json::from_str(r#""janitor""#);
        assert!(result.is_err());
    }
}
