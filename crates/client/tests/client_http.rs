use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::json;

use rolegate_auth::{NewRole, NewUser, Permission, UserStatus};
use rolegate_client::{ApiClient, ApiError};
use rolegate_core::UserId;

struct FakeStore {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeStore {
    /// Serve a canned remote store on an ephemeral port.
    async fn spawn() -> Self {
        let app = Router::new()
            .route(
                "/api/users/",
                get(|| async {
                    Json(json!([
                        {"_id": "u1", "name": "Alice", "email": "a@x.com",
                         "role": "Admin", "status": "Active"},
                        {"_id": "u2", "name": "Bob", "email": "b@x.com",
                         "role": "User", "status": "Inactive"}
                    ]))
                })
                .post(|Json(body): Json<serde_json::Value>| async move {
                    let mut created = body;
                    created["_id"] = json!("u3");
                    (StatusCode::CREATED, Json(created))
                }),
            )
            .route(
                "/api/users/:id",
                delete(|Path(id): Path<String>| async move {
                    if id == "u1" {
                        StatusCode::OK.into_response()
                    } else {
                        (
                            StatusCode::NOT_FOUND,
                            Json(json!({"message": "User not found"})),
                        )
                            .into_response()
                    }
                }),
            )
            .route(
                "/api/roles/",
                get(|| async {
                    // "owner" is not in the permission catalog; decoding must fail.
                    Json(json!([
                        {"_id": "r1", "name": "Admin", "permissions": ["view-users", "owner"]}
                    ]))
                })
                .post(|Json(body): Json<serde_json::Value>| async move {
                    let mut created = body;
                    created["_id"] = json!("r2");
                    (StatusCode::CREATED, Json(created))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for FakeStore {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn list_users_decodes_remote_records() {
    let store = FakeStore::spawn().await;
    let client = ApiClient::new(&store.base_url);

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "a@x.com");
    assert_eq!(users[1].status, UserStatus::Inactive);
}

#[tokio::test]
async fn create_user_posts_draft_and_decodes_created_record() {
    let store = FakeStore::spawn().await;
    let client = ApiClient::new(&store.base_url);

    let created = client
        .create_user(&NewUser {
            name: "Carol".to_string(),
            email: "c@x.com".to_string(),
            password: "secret".to_string(),
            role: "User".to_string(),
            status: UserStatus::Active,
        })
        .await
        .unwrap();

    assert_eq!(created.id.as_str(), "u3");
    assert_eq!(created.role_name, "User");
}

#[tokio::test]
async fn create_role_round_trips_permissions() {
    let store = FakeStore::spawn().await;
    let client = ApiClient::new(&store.base_url);

    let created = client
        .create_role(&NewRole {
            name: "Auditor".to_string(),
            permissions: vec![Permission::ViewUsers, Permission::ViewRoles],
        })
        .await
        .unwrap();

    assert_eq!(created.name, "Auditor");
    assert_eq!(
        created.permissions,
        vec![Permission::ViewUsers, Permission::ViewRoles]
    );
}

#[tokio::test]
async fn delete_error_surfaces_payload_message() {
    let store = FakeStore::spawn().await;
    let client = ApiClient::new(&store.base_url);

    client.delete_user(&UserId::new("u1")).await.unwrap();

    let err = client.delete_user(&UserId::new("missing")).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: "User not found".to_string(),
        }
    );
}

#[tokio::test]
async fn unknown_permission_in_payload_is_a_decode_error() {
    let store = FakeStore::spawn().await;
    let client = ApiClient::new(&store.base_url);

    let err = client.list_roles().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Port 9 (discard) on localhost is almost certainly closed.
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got: {err:?}");
}
