//! `rolegate-client` — typed HTTP client for the remote user/role store.
//!
//! All persistence lives behind a remote JSON API; this crate is the only
//! place that talks to it. Payloads are decoded into the strict schemas from
//! `rolegate-auth` at the boundary, so malformed records fail loudly here
//! instead of propagating undefined fields upward.
//!
//! No authentication headers are sent: the remote API is open and "login"
//! is a client-side lookup.

pub mod api;
pub mod error;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
