//! Component definition model and related types.
//!
//! This module defines the [`ComponentDefinition`] struct and its supporting
//! enums for representing payroll components (earnings, deductions and
//! allowances) as configured per organization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of payroll component a definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// A payment added to gross pay (e.g., overtime, bonus).
    Earning,
    /// An amount withheld from pay (e.g., staff loan repayment).
    Deduction,
    /// An additional entitlement (e.g., transport allowance).
    Allowance,
}

/// How a component's value is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// A fixed currency amount per recurrence period.
    FixedAmount,
    /// A percentage of a base defined outside this engine.
    Percentage,
}

/// The recurrence basis for a fixed-amount component.
///
/// Percentage components are always monthly; the validator rejects any
/// percentage definition whose mode is not [`RecurrenceMode::Monthly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceMode {
    /// Applied once per month.
    Monthly,
    /// Applied once per week.
    Weekly,
    /// Applied once per worked day.
    Daily,
    /// Applied per worked hour.
    Hourly,
}

/// The activation status of a definition or assignment.
///
/// Deactivation is the deletion mechanism: records are never hard-deleted,
/// so toggling status preserves history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    /// The record participates in resolution.
    Active,
    /// The record is retired and never resolves.
    Inactive,
}

impl ComponentStatus {
    /// Returns the opposite status.
    ///
    /// Status is a plain two-state toggle; there are no intermediate states.
    ///
    /// # Examples
    ///
    /// ```
    /// use component_engine::models::ComponentStatus;
    ///
    /// assert_eq!(ComponentStatus::Active.toggled(), ComponentStatus::Inactive);
    /// assert_eq!(ComponentStatus::Inactive.toggled(), ComponentStatus::Active);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            ComponentStatus::Active => ComponentStatus::Inactive,
            ComponentStatus::Inactive => ComponentStatus::Active,
        }
    }

    /// Returns true if the status is [`ComponentStatus::Active`].
    pub fn is_active(self) -> bool {
        self == ComponentStatus::Active
    }
}

/// The canonical definition of a payroll component within an organization.
///
/// Exactly one of `fixed_amount` / `percentage` is populated on a valid
/// definition, and the populated field corresponds to `calculation_method`.
/// `name`, `kind`, `calculation_method` and `mode` are immutable after
/// creation; the store rejects patches that try to change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// The owning tenant. Immutable after creation.
    pub organization_id: String,
    /// Human label (e.g., "Transport Allowance").
    pub name: String,
    /// Whether this is an earning, deduction or allowance.
    pub kind: ComponentKind,
    /// How the component's value is calculated.
    pub calculation_method: CalculationMethod,
    /// Recurrence basis. Always monthly for percentage components.
    pub mode: RecurrenceMode,
    /// The fixed currency amount, for fixed-amount components.
    #[serde(default)]
    pub fixed_amount: Option<Decimal>,
    /// The percentage value, for percentage components.
    #[serde(default)]
    pub percentage: Option<Decimal>,
    /// Whether the component is subject to tax.
    pub is_taxable: bool,
    /// Activation status.
    pub status: ComponentStatus,
    /// Optional start of the validity window (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional end of the validity window (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ComponentDefinition {
    /// Returns the magnitude matching the definition's calculation method.
    ///
    /// Returns `None` when the matching field is unpopulated, which only
    /// happens on definitions that bypassed validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use component_engine::models::{
    ///     CalculationMethod, ComponentDefinition, ComponentKind, ComponentStatus, RecurrenceMode,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let def = ComponentDefinition {
    ///     id: "comp_001".to_string(),
    ///     organization_id: "org_001".to_string(),
    ///     name: "Transport Allowance".to_string(),
    ///     kind: ComponentKind::Allowance,
    ///     calculation_method: CalculationMethod::FixedAmount,
    ///     mode: RecurrenceMode::Monthly,
    ///     fixed_amount: Some(Decimal::new(50000, 2)),
    ///     percentage: None,
    ///     is_taxable: true,
    ///     status: ComponentStatus::Active,
    ///     start_date: None,
    ///     end_date: None,
    /// };
    /// assert_eq!(def.value(), Some(Decimal::new(50000, 2)));
    /// ```
    pub fn value(&self) -> Option<Decimal> {
        match self.calculation_method {
            CalculationMethod::FixedAmount => self.fixed_amount,
            CalculationMethod::Percentage => self.percentage,
        }
    }
}

/// A candidate definition submitted for creation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionDraft {
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
    /// Optional start of the validity window (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional end of the validity window (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// A partial update to an existing definition.
///
/// `None` means "leave unchanged". The immutable fields (`name`,
/// `calculation_method`, `mode`) are present so the store can detect and
/// reject attempts to change them; supplying the current value unchanged is
/// tolerated, since edit forms commonly echo read-only fields back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionPatch {
    /// Immutable after creation; rejected when changed.
    #[serde(default)]
    pub name: Option<String>,
    /// Immutable after creation; rejected when changed.
    #[serde(default)]
    pub calculation_method: Option<CalculationMethod>,
    /// Immutable after creation; rejected when changed.
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
