//! Request types for the payroll component engine API.
//!
//! This module defines the JSON request structures for the definition and
//! assignment endpoints, with conversions into the domain drafts and
//! patches.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AssignmentDraft, AssignmentPatch, CalculationMethod, ComponentKind, ComponentStatus,
    DefinitionDraft, DefinitionPatch, RecurrenceMode,
};

/// Request body for creating a component definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDefinitionRequest {
    /// Human label for the component.
    pub name: String,
    /// Whether this is an earning, deduction or allowance.
    pub kind: ComponentKind,
    /// How the component's value is calculated.
    pub calculation_method: CalculationMethod,
    /// Recurrence basis.
    pub mode: RecurrenceMode,
    /// The fixed currency amount, for fixed-amount components.
    #[serde(default)]
    pub fixed_amount: Option<Decimal>,
    /// The percentage value, for percentage components.
    #[serde(default)]
    pub percentage: Option<Decimal>,
    /// Whether the component is subject to tax.
    pub is_taxable: bool,
    /// Initial status. Defaults to active when omitted.
    #[serde(default)]
    pub status: Option<ComponentStatus>,
    /// Optional start of the validity window.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional end of the validity window.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Request body for updating a component definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDefinitionRequest {
    /// Immutable; rejected when changed.
    #[serde(default)]
    pub name: Option<String>,
    /// Immutable; rejected when changed.
    #[serde(default)]
    pub calculation_method: Option<CalculationMethod>,
    /// Immutable; rejected when changed.
    #[serde(default)]
    pub mode: Option<RecurrenceMode>,
    /// New fixed amount.
    #[serde(default)]
    pub fixed_amount: Option<Decimal>,
    /// New percentage.
    #[serde(default)]
    pub percentage: Option<Decimal>,
    /// New taxability flag.
    #[serde(default)]
    pub is_taxable: Option<bool>,
    /// New activation status.
    #[serde(default)]
    pub status: Option<ComponentStatus>,
    /// New start of the validity window.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// New end of the validity window.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Request body for creating an employee assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    /// The component definition being assigned.
    pub component_id: String,
    /// The company/tenant scope of the assignment.
    pub company_id: String,
    /// Custom fixed amount, for fixed-amount components.
    #[serde(default)]
    pub custom_amount: Option<Decimal>,
    /// Custom percentage, for percentage components.
    #[serde(default)]
    pub custom_percentage: Option<Decimal>,
    /// Initial status. Defaults to active when omitted.
    #[serde(default)]
    pub status: Option<ComponentStatus>,
    /// The date the override becomes active.
    pub effective_date: NaiveDate,
    /// Optional date the override ceases to apply.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Request body for updating an employee assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssignmentRequest {
    /// Immutable; rejected when changed.
    #[serde(default)]
    pub component_id: Option<String>,
    /// New custom fixed amount.
    #[serde(default)]
    pub custom_amount: Option<Decimal>,
    /// New custom percentage.
    #[serde(default)]
    pub custom_percentage: Option<Decimal>,
    /// New activation status.
    #[serde(default)]
    pub status: Option<ComponentStatus>,
    /// New effective date.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    /// New end date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// One item of a bulk assignment update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAssignmentItem {
    /// The assignment to update.
    pub id: String,
    /// The patch to apply to it.
    #[serde(flatten)]
    pub patch: UpdateAssignmentRequest,
}

impl From<CreateDefinitionRequest> for DefinitionDraft {
    fn from(req: CreateDefinitionRequest) -> Self {
        DefinitionDraft {
            name: req.name,
            kind: req.kind,
            calculation_method: req.calculation_method,
            mode: req.mode,
            fixed_amount: req.fixed_amount,
            percentage: req.percentage,
            is_taxable: req.is_taxable,
            status: req.status,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<UpdateDefinitionRequest> for DefinitionPatch {
    fn from(req: UpdateDefinitionRequest) -> Self {
        DefinitionPatch {
            name: req.name,
            calculation_method: req.calculation_method,
            mode: req.mode,
            fixed_amount: req.fixed_amount,
            percentage: req.percentage,
            is_taxable: req.is_taxable,
            status: req.status,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<CreateAssignmentRequest> for AssignmentDraft {
    fn from(req: CreateAssignmentRequest) -> Self {
        AssignmentDraft {
            component_id: req.component_id,
            company_id: req.company_id,
            custom_amount: req.custom_amount,
            custom_percentage: req.custom_percentage,
            status: req.status,
            effective_date: req.effective_date,
            end_date: req.end_date,
        }
    }
}

impl From<UpdateAssignmentRequest> for AssignmentPatch {
    fn from(req: UpdateAssignmentRequest) -> Self {
        AssignmentPatch {
            component_id: req.component_id,
            custom_amount: req.custom_amount,
            custom_percentage: req.custom_percentage,
            status: req.status,
            effective_date: req.effective_date,
            end_date: req.end_date,
        }
    }
}
