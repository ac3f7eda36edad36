//! Error types for the payroll component engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring components,
//! assigning them to employees, or resolving effective values.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// The main error type for the payroll component engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Validation
/// failures carry every violated rule at once so callers can surface all of
/// them to the end user in a single pass.
///
/// # Example
///
/// ```
/// use component_engine::error::EngineError;
///
/// let error = EngineError::DefinitionNotFound {
///     id: "comp_001".to_string(),
///     organization_id: "org_001".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Component definition 'comp_001' not found in organization 'org_001'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A candidate definition or assignment violated one or more
    /// configuration rules. Carries every violation, field-scoped.
    #[error("Validation failed: {errors}")]
    Validation {
        /// The full set of field-scoped violations.
        errors: ValidationErrors,
    },

    /// No component definition with the given id exists within the
    /// organization scope.
    #[error("Component definition '{id}' not found in organization '{organization_id}'")]
    DefinitionNotFound {
        /// The definition id that did not resolve.
        id: String,
        /// The organization scope that was searched.
        organization_id: String,
    },

    /// No assignment with the given id exists for the employee.
    #[error("Assignment '{id}' not found for employee '{employee_id}'")]
    AssignmentNotFound {
        /// The assignment id that did not resolve.
        id: String,
        /// The employee scope that was searched.
        employee_id: String,
    },

    /// An update attempted to change a field that is immutable after
    /// creation.
    #[error("Field '{field}' is immutable after creation")]
    ImmutableField {
        /// The immutable field the caller tried to change.
        field: String,
    },

    /// The persistence collaborator failed (network, timeout). Kept distinct
    /// from validation failures so callers never conflate "bad input" with
    /// "backend unavailable". The engine performs no retries itself.
    #[error("Persistence unavailable: {message}")]
    PersistenceUnavailable {
        /// A description of the transport failure.
        message: String,
    },
}

impl From<ValidationErrors> for EngineError {
    fn from(errors: ValidationErrors) -> Self {
        EngineError::Validation { errors }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
