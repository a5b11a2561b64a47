use serde::{Deserialize, Serialize};

use rolegate_core::{DomainError, DomainResult, UserId};

use crate::{Permission, Role, User, UserStatus};

/// The in-memory authenticated-session object: a user record joined with the
/// permission set of its resolved role.
///
/// # Invariants
/// - Only constructed after both the user lookup and the role lookup
///   succeed; a user whose role reference matches no known role never
///   produces an `Identity`.
/// - `permissions` is derived from the role at construction time and is not
///   re-validated afterwards: deleting the backing role mid-session leaves
///   the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role_name: String,
    pub status: UserStatus,
    pub permissions: Vec<Permission>,
}

impl Identity {
    /// Join a user record with its resolved role.
    ///
    /// Fails if the role does not actually match the user's role reference
    /// (case-insensitive), which would mean the caller correlated the wrong
    /// record.
    pub fn from_user_and_role(user: User, role: &Role) -> DomainResult<Self> {
        if !role.matches_name(&user.role_name) {
            return Err(DomainError::invariant(format!(
                "role '{}' does not match user's role reference '{}'",
                role.name, user.role_name
            )));
        }

        Ok(Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role_name: user.role_name,
            status: user.status,
            permissions: role.permissions.clone(),
        })
    }

    /// Exact membership test against the derived permission set.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
