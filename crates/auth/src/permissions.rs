use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission token granting the ability to perform one dashboard action.
///
/// The set is closed: the remote store only ever carries these eight tokens,
/// serialized kebab-case (e.g. `"delete-user"`). Anything else in a payload
/// is a decoding failure, not a silently ignored string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    AddUser,
    DeleteUser,
    EditUser,
    ViewUsers,
    AddRole,
    DeleteRole,
    EditRole,
    ViewRoles,
}

impl Permission {
    /// Every known permission, in catalog order (role editors iterate this).
    pub const ALL: [Permission; 8] = [
        Permission::AddUser,
        Permission::DeleteUser,
        Permission::EditUser,
        Permission::ViewUsers,
        Permission::AddRole,
        Permission::DeleteRole,
        Permission::EditRole,
        Permission::ViewRoles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::AddUser => "add-user",
            Permission::DeleteUser => "delete-user",
            Permission::EditUser => "edit-user",
            Permission::ViewUsers => "view-users",
            Permission::AddRole => "add-role",
            Permission::DeleteRole => "delete-role",
            Permission::EditRole => "edit-role",
            Permission::ViewRoles => "view-roles",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permission string outside the closed catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: '{0}'")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&Permission::DeleteUser).unwrap();
        assert_eq!(json, "\"delete-user\"");
    }

    #[test]
    fn parse_round_trips_catalog() {
        for perm in Permission::ALL {
            assert_eq!(perm.as_str().parse::<Permission>().unwrap(), perm);
        }
    }

    #[test]
    fn unknown_string_is_rejected() {
        let err = "drop-tables".parse::<Permission>().unwrap_err();
        assert_eq!(err, UnknownPermission("drop-tables".to_string()));
    }

    #[test]
    fn decoding_unknown_permission_fails() {
        // Strict schema at the boundary: bad tokens surface as decode errors.
        let result: Result<Vec<Permission>, _> =
            serde_json::from_str(r#"["view-users", "launch-missiles"]"#);
        assert!(result.is_err());
    }
}
