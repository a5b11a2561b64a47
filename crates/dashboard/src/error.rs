use thiserror::Error;

use rolegate_auth::AuthzError;
use rolegate_client::ApiError;
use rolegate_core::ValidationError;

/// Failure of a guarded list action (load, add, delete).
///
/// `Unauthorized` and `Validation` are raised before any network call and
/// never disturb displayed state; `Transport` is the remote call itself
/// failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Unauthorized(#[from] AuthzError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] ApiError),
}
