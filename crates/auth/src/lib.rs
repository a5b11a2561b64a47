//! `rolegate-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it defines
//! the typed records exchanged with the remote store, the in-memory
//! `Identity`/`Session` lifecycle, and the permission gate consulted before
//! every privileged action. Gate decisions here are advisory UI gating only;
//! real enforcement belongs to the server.

pub mod gate;
pub mod identity;
pub mod permissions;
pub mod role;
pub mod session;
pub mod user;

pub use gate::{AuthzError, allows, require};
pub use identity::Identity;
pub use permissions::{Permission, UnknownPermission};
pub use role::{NewRole, Role};
pub use session::Session;
pub use user::{NewUser, User, UserStatus};
