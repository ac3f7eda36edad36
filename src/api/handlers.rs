//! HTTP request handlers for the payroll component engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::export_rows;
use crate::models::AssignmentPatch;

use super::request::{
    BulkAssignmentItem, CreateAssignmentRequest, CreateDefinitionRequest,
    UpdateAssignmentRequest, UpdateDefinitionRequest,
};
use super::response::{ApiError, ApiErrorResponse, BulkItemOutcome};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/organizations/:organization_id/components",
            post(create_definition_handler).get(list_definitions_handler),
        )
        .route(
            "/organizations/:organization_id/components/export",
            get(export_definitions_handler),
        )
        .route(
            "/organizations/:organization_id/components/:component_id",
            patch(update_definition_handler),
        )
        .route(
            "/organizations/:organization_id/components/:component_id/toggle",
            post(toggle_definition_handler),
        )
        .route(
            "/employees/:employee_id/assignments",
            post(create_assignment_handler).patch(bulk_update_assignments_handler),
        )
        .route(
            "/employees/:employee_id/assignments/:assignment_id",
            patch(update_assignment_handler),
        )
        .route(
            "/employees/:employee_id/effective-components",
            get(effective_components_handler),
        )
        .with_state(state)
}

/// Translates an axum JSON rejection into the API error body.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for POST /organizations/{organization_id}/components.
async fn create_definition_handler(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
    payload: Result<Json<CreateDefinitionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        organization_id = %organization_id,
        name = %request.name,
        "Creating component definition"
    );

    match state.store().create_definition(&organization_id, request.into()) {
        Ok(definition) => (StatusCode::CREATED, Json(definition)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Create definition failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /organizations/{organization_id}/components.
async fn list_definitions_handler(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Response {
    match state.store().list_by_organization(&organization_id) {
        Ok(definitions) => (StatusCode::OK, Json(definitions)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /organizations/{organization_id}/components/export.
///
/// Returns the row-oriented projection consumed by downstream CSV/PDF
/// rendering.
async fn export_definitions_handler(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Response {
    match state.store().list_by_organization(&organization_id) {
        Ok(definitions) => (StatusCode::OK, Json(export_rows(&definitions))).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PATCH /organizations/{organization_id}/components/{id}.
async fn update_definition_handler(
    State(state): State<AppState>,
    Path((organization_id, component_id)): Path<(String, String)>,
    payload: Result<Json<UpdateDefinitionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state
        .store()
        .update_definition(&organization_id, &component_id, &request.into())
    {
        Ok(definition) => (StatusCode::OK, Json(definition)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                component_id = %component_id,
                error = %err,
                "Update definition failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /organizations/{organization_id}/components/{id}/toggle.
async fn toggle_definition_handler(
    State(state): State<AppState>,
    Path((organization_id, component_id)): Path<(String, String)>,
) -> Response {
    match state
        .store()
        .toggle_definition_status(&organization_id, &component_id)
    {
        Ok(definition) => (StatusCode::OK, Json(definition)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /employees/{employee_id}/assignments.
async fn create_assignment_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<CreateAssignmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        component_id = %request.component_id,
        "Creating employee assignment"
    );

    match state.store().create_assignment(&employee_id, request.into()) {
        Ok(assignment) => (StatusCode::CREATED, Json(assignment)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Create assignment failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PATCH /employees/{employee_id}/assignments/{id}.
async fn update_assignment_handler(
    State(state): State<AppState>,
    Path((employee_id, assignment_id)): Path<(String, String)>,
    payload: Result<Json<UpdateAssignmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state
        .store()
        .update_assignment(&employee_id, &assignment_id, &request.into())
    {
        Ok(assignment) => (StatusCode::OK, Json(assignment)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                assignment_id = %assignment_id,
                error = %err,
                "Update assignment failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PATCH /employees/{employee_id}/assignments.
///
/// Applies each item independently and always returns 200 with a per-item
/// outcome list; the caller decides whether to apply, partially apply, or
/// discard its local state.
async fn bulk_update_assignments_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<Vec<BulkAssignmentItem>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let items = match payload {
        Ok(Json(items)) => items,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let updates: Vec<(String, AssignmentPatch)> = items
        .into_iter()
        .map(|item| (item.id, item.patch.into()))
        .collect();

    let outcomes = state.store().bulk_update_assignments(&employee_id, updates);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        total = outcomes.len(),
        failed,
        "Bulk assignment update processed"
    );

    let body: Vec<BulkItemOutcome> = outcomes
        .into_iter()
        .map(|outcome| match outcome.result {
            Ok(assignment) => BulkItemOutcome {
                id: outcome.id,
                assignment: Some(assignment),
                error: None,
            },
            Err(err) => BulkItemOutcome {
                id: outcome.id,
                assignment: None,
                error: Some(ApiErrorResponse::from(err).error),
            },
        })
        .collect();

    (StatusCode::OK, Json(body)).into_response()
}

/// Query parameters for the effective-components endpoint.
#[derive(Debug, Deserialize)]
struct EffectiveQuery {
    organization_id: String,
    date: NaiveDate,
}

/// Handler for GET /employees/{employee_id}/effective-components.
async fn effective_components_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<EffectiveQuery>,
) -> Response {
    match state
        .store()
        .effective_components(&query.organization_id, &employee_id, query.date)
    {
        Ok(effectives) => (StatusCode::OK, Json(effectives)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
