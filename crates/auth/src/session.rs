use crate::{AuthzError, Identity, Permission, gate};

/// Process-wide session state: exactly one active [`Identity`] or none.
///
/// Deliberately an owned object with an explicit create/clear lifecycle
/// rather than ambient global state; the embedding shell decides where it
/// lives and passes it to every consumer. Held only in memory; there is no
/// persisted token and no expiry.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active identity (successful login).
    pub fn sign_in(&mut self, identity: Identity) {
        tracing::info!(email = %identity.email, role = %identity.role_name, "session established");
        self.current = Some(identity);
    }

    /// Drop the active identity (logout, or a failed login leaving no
    /// partial state behind).
    pub fn clear(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!(email = %identity.email, "session cleared");
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Gate check against the active identity, if any.
    pub fn allows(&self, permission: Permission) -> bool {
        gate::allows(self.current(), permission)
    }

    /// Gate check as a `Result`, for error-path call sites.
    pub fn require(&self, permission: Permission) -> Result<(), AuthzError> {
        gate::require(self.current(), permission)
    }
}
