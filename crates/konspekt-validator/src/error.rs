//! Validator error types

use thiserror::Error;

/// A single schema violation
///
/// Validation is fail-fast: the first violation encountered is returned
/// and no further fields are examined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("schema validation failed for '{field}': {reason}")]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "homework[2].task")
    pub field: String,

    /// Human-readable description of the violation
    pub reason: String,
}

impl ValidationError {
    /// Create a violation for `field`
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
