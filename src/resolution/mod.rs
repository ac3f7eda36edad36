//! Override resolution for the payroll component engine.
//!
//! This module computes the effective per-employee configuration by layering
//! an employee-specific override onto a component definition, honoring
//! status and validity windows. Resolution is a pure function of
//! (definition, assignment, evaluation date) so that re-running a prior pay
//! period always yields the same effective values.

mod resolver;

pub use resolver::{resolve, resolve_all};
