use serde::{Deserialize, Serialize};

use rolegate_core::{RoleId, ValidationError};

use crate::Permission;

/// Role record as stored remotely: a named bundle of permissions.
///
/// `name` is the join key users reference via their `role` field; the match
/// is case-insensitive. Extra wire fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: RoleId,
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Case-insensitive name match, used when correlating a user's role
    /// reference with the role catalog.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Draft for a role about to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRole {
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl NewRole {
    /// Required-field validation, run before any network call: a role needs
    /// a non-blank name and at least one permission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.permissions.is_empty() {
            missing.push("permissions");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_match_is_case_insensitive() {
        let role = Role {
            id: RoleId::new("r1"),
            name: "Admin".to_string(),
            permissions: vec![Permission::ViewUsers],
        };
        assert!(role.matches_name("admin"));
        assert!(role.matches_name("ADMIN"));
        assert!(!role.matches_name("auditor"));
    }

    #[test]
    fn decodes_remote_record_shape() {
        let role: Role = serde_json::from_str(
            r#"{"_id": "65a1", "name": "Editor", "permissions": ["edit-user", "view-users"]}"#,
        )
        .unwrap();
        assert_eq!(role.id.as_str(), "65a1");
        assert_eq!(
            role.permissions,
            vec![Permission::EditUser, Permission::ViewUsers]
        );
    }

    #[test]
    fn new_role_requires_name_and_permissions() {
        let draft = NewRole {
            name: "  ".to_string(),
            permissions: vec![],
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.fields, vec!["name", "permissions"]);

        let draft = NewRole {
            name: "Auditor".to_string(),
            permissions: vec![Permission::ViewRoles],
        };
        assert!(draft.validate().is_ok());
    }
}
