//! The session resolver: turns an email into an authenticated [`Identity`]
//! by correlating a user record with its role's permission set.

use thiserror::Error;

use rolegate_auth::{Identity, Session};
use rolegate_client::{ApiClient, ApiError};
use rolegate_core::DomainError;

/// Where the view layer should navigate after a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Home,
    Login,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// No stored user has the given email (exact, case-sensitive match).
    #[error("User not found")]
    UserNotFound,

    /// The user exists but references a role the store no longer has.
    #[error("role '{0}' not found")]
    RoleNotFound(String),

    #[error(transparent)]
    Transport(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Resolves logins against the remote store.
///
/// Resolution is two sequential round-trips with no atomicity: a role
/// deleted between the user fetch and the role fetch yields `RoleNotFound`
/// even though the user existed a moment earlier. Accepted: this is an
/// advisory correlation, not a security check, and there is no password
/// verification anywhere in the flow.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    api: ApiClient,
}

impl SessionResolver {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Resolve an email to a full identity without touching session state.
    ///
    /// 1. Fetch all users; pick the first whose email matches exactly.
    /// 2. Fetch all roles; pick the first whose name matches the user's
    ///    role reference case-insensitively.
    /// 3. Join the two into an [`Identity`].
    pub async fn resolve(&self, email: &str) -> Result<Identity, LoginError> {
        let users = self.api.list_users().await?;
        let user = users
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(LoginError::UserNotFound)?;

        let roles = self.api.list_roles().await?;
        let role = roles
            .iter()
            .find(|r| r.matches_name(&user.role_name))
            .ok_or_else(|| LoginError::RoleNotFound(user.role_name.clone()))?;

        let identity = Identity::from_user_and_role(user, role)?;
        tracing::info!(
            email = %identity.email,
            role = %identity.role_name,
            permissions = identity.permissions.len(),
            "login resolved"
        );
        Ok(identity)
    }

    /// Resolve and install the identity as the active session.
    ///
    /// Any failure clears the session so no partial identity survives.
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
    ) -> Result<Navigation, LoginError> {
        match self.resolve(email).await {
            Ok(identity) => {
                session.sign_in(identity);
                Ok(Navigation::Home)
            }
            Err(err) => {
                tracing::warn!(email, error = %err, "login failed");
                session.clear();
                Err(err)
            }
        }
    }

    /// Drop the active session.
    pub fn logout(&self, session: &mut Session) -> Navigation {
        session.clear();
        Navigation::Login
    }
}
