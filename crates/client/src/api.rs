use serde::Deserialize;

use rolegate_auth::{NewRole, NewUser, Role, User};
use rolegate_core::{RoleId, UserId};

use crate::ApiError;

/// Base URL of the deployed remote store.
pub const DEFAULT_BASE_URL: &str = "https://dashboard-psi-murex-25.vercel.app";

/// Error payload shape returned by the remote API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

/// Client for the remote user/role store.
///
/// Cheap to clone (`reqwest::Client` is an `Arc` internally). No retries, no
/// timeouts beyond reqwest defaults: a request settles or the enclosing view
/// is discarded.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the full user collection. There is no server-side filtering;
    /// callers search the returned list themselves.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(&self.users_url()).await
    }

    /// POST a new user record.
    pub async fn create_user(&self, draft: &NewUser) -> Result<User, ApiError> {
        tracing::debug!(email = %draft.email, role = %draft.role, "creating user");
        self.post_json(&self.users_url(), draft).await
    }

    /// DELETE a user record by id.
    pub async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        tracing::debug!(user_id = %id, "deleting user");
        self.delete(&format!("{}/api/users/{}", self.base_url, id)).await
    }

    /// GET the full role collection.
    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.get_json(&self.roles_url()).await
    }

    /// POST a new role record.
    pub async fn create_role(&self, draft: &NewRole) -> Result<Role, ApiError> {
        tracing::debug!(name = %draft.name, "creating role");
        self.post_json(&self.roles_url(), draft).await
    }

    /// DELETE a role record by id.
    ///
    /// The store does not guard against deleting a role still referenced by
    /// users; neither does the client.
    pub async fn delete_role(&self, id: &RoleId) -> Result<(), ApiError> {
        tracing::debug!(role_id = %id, "deleting role");
        self.delete(&format!("{}/api/roles/{}", self.base_url, id)).await
    }

    fn users_url(&self) -> String {
        format!("{}/api/users/", self.base_url)
    }

    fn roles_url(&self) -> String {
        format!("{}/api/roles/", self.base_url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self.http.get(url).send().await.map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        resp.json().await.map_err(ApiError::decode)
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        resp.json().await.map_err(ApiError::decode)
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        Ok(())
    }

    async fn status_error(resp: reqwest::Response) -> ApiError {
        let status = resp.status().as_u16();
        let message = resp
            .json::<ErrorPayload>()
            .await
            .ok()
            .and_then(|payload| payload.message)
            .unwrap_or_else(|| format!("Error: {status}"));
        tracing::warn!(status, %message, "remote API returned an error");
        ApiError::Status { status, message }
    }
}
