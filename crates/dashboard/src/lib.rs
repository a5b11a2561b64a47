//! `rolegate-dashboard` — the dashboard core a UI shell embeds.
//!
//! **Responsibility:** session resolution (login/logout) and the guarded
//! CRUD orchestrators for the users and roles lists. Every privileged action
//! runs through the permission gate before any network call; denied actions
//! surface an unauthorized notice and change nothing.
//!
//! Rendering, routing and form markup are the embedding shell's problem;
//! this crate only exposes the state those views display.

pub mod config;
pub mod error;
pub mod list;
pub mod resolver;
pub mod roles;
pub mod telemetry;
pub mod users;

pub use config::Config;
pub use error::ActionError;
pub use list::{DeleteOutcome, ListState, Notice};
pub use resolver::{LoginError, Navigation, SessionResolver};
pub use roles::RolesController;
pub use users::UsersController;
