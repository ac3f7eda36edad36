//! Core data models for the payroll component engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod component;
mod effective;

pub use assignment::{AssignmentDraft, AssignmentPatch, EmployeeAssignment};
pub use component::{
    CalculationMethod, ComponentDefinition, ComponentKind, ComponentStatus, DefinitionDraft,
    DefinitionPatch, RecurrenceMode,
};
pub use effective::{EffectiveComponent, NotApplicableReason, Resolution, ValueSource};
