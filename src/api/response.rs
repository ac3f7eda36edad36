//! Response types for the payroll component engine API.
//!
//! This module defines the error response structures and the translation
//! from engine errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::EmployeeAssignment;
use crate::validation::FieldError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-scoped violations, present on validation errors so the UI can
    /// surface all of them simultaneously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            field_errors: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
            field_errors: None,
        }
    }

    /// Creates a validation error response carrying every violated rule.
    pub fn validation_error(errors: Vec<FieldError>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "Validation failed".to_string(),
            details: None,
            field_errors: Some(errors),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { errors } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(errors.errors().to_vec()),
            },
            EngineError::DefinitionNotFound {
                id,
                organization_id,
            } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NOT_FOUND",
                    format!("Component definition '{}' not found", id),
                    format!(
                        "No definition with id '{}' exists in organization '{}'",
                        id, organization_id
                    ),
                ),
            },
            EngineError::AssignmentNotFound { id, employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NOT_FOUND",
                    format!("Assignment '{}' not found", id),
                    format!(
                        "No assignment with id '{}' exists for employee '{}'",
                        id, employee_id
                    ),
                ),
            },
            EngineError::ImmutableField { field } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "IMMUTABLE_FIELD",
                    format!("Field '{}' is immutable after creation", field),
                    "Create a new component instead of changing this field",
                ),
            },
            EngineError::PersistenceUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "PERSISTENCE_UNAVAILABLE",
                    "Backend temporarily unavailable",
                    message,
                ),
            },
        }
    }
}

/// One item of a bulk assignment update response.
///
/// The batch itself always returns HTTP 200; each record succeeds or fails
/// independently and the caller reconciles its local state from this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItemOutcome {
    /// The assignment id the outcome belongs to.
    pub id: String,
    /// The updated assignment, when the record succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<EmployeeAssignment>,
    /// The failure, when the record was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}
