//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, local failures (validation,
/// invariants). Transport concerns belong to the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. missing required fields).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

/// Local required-field validation failure.
///
/// Carries the names of the offending fields so the view layer can highlight
/// them. Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(fields: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn field(name: &'static str) -> Self {
        Self { fields: vec![name] }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.fields.is_empty() {
            f.write_str("validation failed: all fields are required")
        } else {
            write!(f, "validation failed: required field(s): {}", self.fields.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_fields() {
        let err = ValidationError::new(["name", "email"]);
        assert_eq!(err.to_string(), "validation failed: required field(s): name, email");
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::field("role").into();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
