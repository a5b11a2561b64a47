//! Guarded CRUD orchestrator for the roles list.
//!
//! Same shape as the users orchestrator, minus the role-picker catalog:
//! gate check, local validation, remote call, full re-fetch.

use std::collections::HashSet;

use tokio::sync::Mutex;

use rolegate_auth::{NewRole, Permission, Role, Session};
use rolegate_client::{ApiClient, ApiError};
use rolegate_core::RoleId;

use crate::error::ActionError;
use crate::list::{DeleteOutcome, ListState, Notice};

#[derive(Debug, Default)]
struct RolesState {
    roles: ListState<Role>,
    deleting: HashSet<RoleId>,
    notice: Option<Notice>,
}

pub struct RolesController {
    api: ApiClient,
    state: Mutex<RolesState>,
}

impl RolesController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Mutex::new(RolesState::default()),
        }
    }

    /// Load the roles list, gated on `view-roles`.
    pub async fn load(&self, session: &Session) -> Result<(), ActionError> {
        if let Err(err) = session.require(Permission::ViewRoles) {
            self.set_notice(Notice::Unauthorized(
                "You are not authorized to view roles.".to_string(),
            ))
            .await;
            return Err(err.into());
        }

        self.refresh_roles().await?;
        Ok(())
    }

    /// Add a role: gate, validate (name plus a non-empty permission set),
    /// POST, then re-fetch the list.
    pub async fn add(&self, session: &Session, draft: NewRole) -> Result<(), ActionError> {
        self.dismiss_notice().await;

        if let Err(err) = session.require(Permission::AddRole) {
            self.set_notice(Notice::Unauthorized(
                "You are not authorized to add roles.".to_string(),
            ))
            .await;
            return Err(err.into());
        }

        if let Err(err) = draft.validate() {
            self.set_notice(Notice::Error(err.to_string())).await;
            return Err(err.into());
        }

        if let Err(err) = self.api.create_role(&draft).await {
            self.set_notice(Notice::Error(err.to_string())).await;
            return Err(err.into());
        }

        if self.refresh_roles().await.is_ok() {
            self.set_notice(Notice::Success("Role added successfully!".to_string()))
                .await;
        }
        Ok(())
    }

    /// Delete a role: gate, confirm, mark in flight, DELETE, re-fetch.
    ///
    /// Nothing guards against deleting a role still referenced by users;
    /// that is the remote store's concern, and live sessions backed by the
    /// role are not re-validated.
    pub async fn delete(
        &self,
        session: &Session,
        id: &RoleId,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, ActionError> {
        if let Err(err) = session.require(Permission::DeleteRole) {
            self.set_notice(Notice::Unauthorized(
                "You are not authorized to delete roles.".to_string(),
            ))
            .await;
            return Err(err.into());
        }

        if self.state.lock().await.deleting.contains(id) {
            return Ok(DeleteOutcome::AlreadyInProgress);
        }

        if !confirm() {
            return Ok(DeleteOutcome::Cancelled);
        }

        {
            let mut state = self.state.lock().await;
            if !state.deleting.insert(id.clone()) {
                return Ok(DeleteOutcome::AlreadyInProgress);
            }
            state.notice = None;
        }

        match self.api.delete_role(id).await {
            Ok(()) => {
                let refreshed = self.refresh_roles().await;
                self.state.lock().await.deleting.remove(id);
                if refreshed.is_ok() {
                    self.set_notice(Notice::Success("Role deleted successfully!".to_string()))
                        .await;
                }
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.deleting.remove(id);
                state.notice = Some(Notice::Error(format!("Failed to delete role: {err}")));
                Err(err.into())
            }
        }
    }

    pub async fn roles(&self) -> ListState<Role> {
        self.state.lock().await.roles.clone()
    }

    pub async fn is_deleting(&self, id: &RoleId) -> bool {
        self.state.lock().await.deleting.contains(id)
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.state.lock().await.notice.clone()
    }

    pub async fn dismiss_notice(&self) {
        self.state.lock().await.notice = None;
    }

    async fn set_notice(&self, notice: Notice) {
        self.state.lock().await.notice = Some(notice);
    }

    async fn refresh_roles(&self) -> Result<(), ApiError> {
        let previous = self.state.lock().await.roles.begin_loading();
        match self.api.list_roles().await {
            Ok(rows) => {
                self.state.lock().await.roles = ListState::Ready(rows);
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.roles.settle_failure(previous, err.to_string());
                state.notice = Some(Notice::Error(err.to_string()));
                Err(err)
            }
        }
    }
}
