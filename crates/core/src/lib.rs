//! `rolegate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no view concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, ValidationError};
pub use id::{RoleId, UserId};
