//! Guarded CRUD orchestrator for the users list.

use std::collections::HashSet;

use tokio::sync::Mutex;

use rolegate_auth::{NewUser, Permission, Role, Session, User};
use rolegate_client::{ApiClient, ApiError};
use rolegate_core::{UserId, ValidationError};

use crate::error::ActionError;
use crate::list::{DeleteOutcome, ListState, Notice};

#[derive(Debug, Default)]
struct UsersState {
    users: ListState<User>,
    /// Role catalog backing the role picker on the add-user form.
    role_options: ListState<Role>,
    /// Targets with a DELETE currently in flight.
    deleting: HashSet<UserId>,
    notice: Option<Notice>,
}

/// Orchestrates fetch/add/delete for the users list under gate control.
///
/// Every mutating path is: gate check, local validation, remote call, full
/// re-fetch. Denied or invalid actions never reach the network and never
/// disturb displayed rows. State sits behind a `tokio` mutex that is never
/// held across an await, so distinct deletes may be in flight concurrently.
pub struct UsersController {
    api: ApiClient,
    state: Mutex<UsersState>,
}

impl UsersController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Mutex::new(UsersState::default()),
        }
    }

    /// Load the view: the role catalog unconditionally (it only feeds the
    /// picker), the users list gated on `view-users`.
    pub async fn load(&self, session: &Session) -> Result<(), ActionError> {
        let _ = self.refresh_role_options().await;

        if let Err(err) = session.require(Permission::ViewUsers) {
            self.set_notice(Notice::Unauthorized(
                "You are not authorized to view users.".to_string(),
            ))
            .await;
            return Err(err.into());
        }

        self.refresh_users().await?;
        Ok(())
    }

    /// Add a user: gate, validate fields, check the chosen role against the
    /// fetched catalog, POST, then re-fetch the list.
    pub async fn add(&self, session: &Session, draft: NewUser) -> Result<(), ActionError> {
        self.dismiss_notice().await;

        if let Err(err) = session.require(Permission::AddUser) {
            self.set_notice(Notice::Unauthorized(
                "You are not authorized to add users.".to_string(),
            ))
            .await;
            return Err(err.into());
        }

        if let Err(err) = draft.validate() {
            self.set_notice(Notice::Error(err.to_string())).await;
            return Err(err.into());
        }

        let role_known = {
            let state = self.state.lock().await;
            state
                .role_options
                .rows()
                .is_some_and(|roles| roles.iter().any(|r| r.name == draft.role))
        };
        if !role_known {
            self.set_notice(Notice::Error("Selected role is invalid.".to_string()))
                .await;
            return Err(ValidationError::field("role").into());
        }

        if let Err(err) = self.api.create_user(&draft).await {
            self.set_notice(Notice::Error(err.to_string())).await;
            return Err(err.into());
        }

        // The add itself succeeded; a failed re-fetch only costs freshness.
        if self.refresh_users().await.is_ok() {
            self.set_notice(Notice::Success("User added successfully!".to_string()))
                .await;
        }
        Ok(())
    }

    /// Delete a user: gate, confirm, mark in flight, DELETE, re-fetch.
    ///
    /// A second request for a target already in flight reports
    /// [`DeleteOutcome::AlreadyInProgress`] instead of retrying.
    pub async fn delete(
        &self,
        session: &Session,
        id: &UserId,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, ActionError> {
        if let Err(err) = session.require(Permission::DeleteUser) {
            self.set_notice(Notice::Unauthorized(
                "You are not authorized to delete users.".to_string(),
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

        match self.api.delete_user(id).await {
            Ok(()) => {
                let refreshed = self.refresh_users().await;
                self.state.lock().await.deleting.remove(id);
                if refreshed.is_ok() {
                    self.set_notice(Notice::Success("User deleted successfully!".to_string()))
                        .await;
                }
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.deleting.remove(id);
                state.notice = Some(Notice::Error(format!("Failed to delete user: {err}")));
                Err(err.into())
            }
        }
    }

    pub async fn users(&self) -> ListState<User> {
        self.state.lock().await.users.clone()
    }

    pub async fn role_options(&self) -> ListState<Role> {
        self.state.lock().await.role_options.clone()
    }

    pub async fn is_deleting(&self, id: &UserId) -> bool {
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

    async fn refresh_users(&self) -> Result<(), ApiError> {
        let previous = self.state.lock().await.users.begin_loading();
        match self.api.list_users().await {
            Ok(rows) => {
                self.state.lock().await.users = ListState::Ready(rows);
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.users.settle_failure(previous, err.to_string());
                state.notice = Some(Notice::Error(err.to_string()));
                Err(err)
            }
        }
    }

    async fn refresh_role_options(&self) -> Result<(), ApiError> {
        let previous = self.state.lock().await.role_options.begin_loading();
        match self.api.list_roles().await {
            Ok(rows) => {
                self.state.lock().await.role_options = ListState::Ready(rows);
                Ok(())
            }
            Err(err) => {
                self.state
                    .lock()
                    .await
                    .role_options
                    .settle_failure(previous, err.to_string());
                Err(err)
            }
        }
    }
}
