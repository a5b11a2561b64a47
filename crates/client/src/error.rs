use thiserror::Error;

/// Transport-level failure talking to the remote store.
///
/// Carries strings rather than the underlying `reqwest` errors so the type
/// stays cheap to clone into notices and trivial to assert on in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `message` is taken from
    /// the error payload's `message` field when present, otherwise a
    /// generic `Error: {status}` text.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not decode into the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        Self::Decode(err.to_string())
    }

    /// Status code for `Status` failures, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
