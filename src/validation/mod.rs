//! Consistency validation for definitions and assignments.
//!
//! This module implements the shared rule set that guards every create and
//! update path. The rules are evaluated together rather than short-circuited
//! so that every violation is reported to the caller at once, and the same
//! functions back both the create-time and edit-time paths so the rules can
//! never drift apart.

mod assignment;
mod definition;
mod errors;

pub use assignment::validate_assignment;
pub use definition::{validate_definition, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
pub use errors::{FieldError, ValidationErrors};
