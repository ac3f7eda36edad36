//! HTTP API module for the payroll component engine.
//!
//! This module provides the REST endpoints for managing component
//! definitions and employee assignments, and for resolving effective
//! components for a pay run. It contains no domain rules of its own — only
//! JSON mapping and error translation around the store.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BulkAssignmentItem, CreateAssignmentRequest, CreateDefinitionRequest, UpdateAssignmentRequest,
    UpdateDefinitionRequest,
};
pub use response::{ApiError, BulkItemOutcome};
pub use state::AppState;
