use serde::{Deserialize, Serialize};

use rolegate_core::{UserId, ValidationError};

/// User account status.
///
/// Informational in the current scope: an `Inactive` user can still log in;
/// nothing in the client treats status as a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserStatus::Active => f.write_str("Active"),
            UserStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

/// User record as stored remotely.
///
/// `role_name` references a [`crate::Role`] by name; permissions are never
/// stored here, they are resolved from the role at login time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    pub status: UserStatus,
}

/// Draft for a user about to be created.
///
/// Carries a password because the remote store expects one on creation; the
/// client never verifies passwords (login is a lookup, not an authentication
/// handshake).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub status: UserStatus,
}

impl NewUser {
    /// Required-field validation, run before any network call. Whether the
    /// chosen role actually exists is checked against the fetched role
    /// catalog by the orchestrator, not here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.password.trim().is_empty() {
            missing.push("password");
        }
        if self.role.trim().is_empty() {
            missing.push("role");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }
}
