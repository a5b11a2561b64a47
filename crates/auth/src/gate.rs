//! The permission gate: the single decision point consulted before every
//! privileged dashboard action.
//!
//! - No IO
//! - No panics
//! - No business logic (pure policy check)
//!
//! The gate fails closed: no session means no permission, and a denial
//! aborts the action before any network call.

use thiserror::Error;

use crate::{Identity, Permission};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// No active session.
    #[error("not logged in")]
    NotLoggedIn,

    /// The session exists but its role does not grant the permission.
    #[error("not authorized: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Decide whether the current session may perform an action.
pub fn allows(identity: Option<&Identity>, permission: Permission) -> bool {
    match identity {
        Some(identity) => identity.has_permission(permission),
        None => false,
    }
}

/// [`allows`] as a `Result`, for call sites on the error path.
pub fn require(identity: Option<&Identity>, permission: Permission) -> Result<(), AuthzError> {
    match identity {
        None => Err(AuthzError::NotLoggedIn),
        Some(identity) if identity.has_permission(permission) => Ok(()),
        Some(_) => Err(AuthzError::Forbidden(permission)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, User, UserStatus};
    use rolegate_core::{RoleId, UserId};

    fn identity(permissions: Vec<Permission>) -> Identity {
        let user = User {
            id: UserId::new("u1"),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            role_name: "Admin".to_string(),
            status: UserStatus::Active,
        };
        let role = Role {
            id: RoleId::new("r1"),
            name: "Admin".to_string(),
            permissions,
        };
        Identity::from_user_and_role(user, &role).unwrap()
    }

    #[test]
    fn absent_identity_is_always_denied() {
        for perm in Permission::ALL {
            assert!(!allows(None, perm));
        }
        assert_eq!(require(None, Permission::ViewUsers), Err(AuthzError::NotLoggedIn));
    }

    #[test]
    fn allowed_iff_permission_is_held() {
        let identity = identity(vec![Permission::ViewUsers, Permission::DeleteUser]);

        for perm in Permission::ALL {
            let held = identity.permissions.contains(&perm);
            assert_eq!(allows(Some(&identity), perm), held);
        }
    }

    #[test]
    fn require_names_the_missing_permission() {
        let identity = identity(vec![Permission::ViewUsers]);
        assert_eq!(
            require(Some(&identity), Permission::AddUser),
            Err(AuthzError::Forbidden(Permission::AddUser))
        );
        assert!(require(Some(&identity), Permission::ViewUsers).is_ok());
    }

    #[test]
    fn empty_permission_set_denies_everything() {
        let identity = identity(vec![]);
        for perm in Permission::ALL {
            assert!(!allows(Some(&identity), perm));
        }
    }
}
