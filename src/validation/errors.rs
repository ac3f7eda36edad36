//! Field-scoped validation error types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single validation failure, scoped to the field that caused it.
///
/// # Example
///
/// ```
/// use component_engine::validation::FieldError;
///
/// let error = FieldError::new("mode", "must be monthly for percentage components");
/// assert_eq!(error.to_string(), "mode: must be monthly for percentage components");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field the rule violation is attached to.
    pub field: String,
    /// A human-readable description of the violation.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A non-empty collection of field-scoped validation failures.
///
/// Returned, never thrown, by the validators. Callers surface all contained
/// errors simultaneously rather than fixing one violation at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Returns the contained field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if any error is attached to the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no violations are present. Validators never
    /// construct an empty set; this exists for completeness alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty(), "ValidationErrors must be non-empty");
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Wraps a violation list into a `Result`, treating an empty list as success.
pub(crate) fn into_result(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::from(errors))
    }
}
