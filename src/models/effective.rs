//! Effective component model.
//!
//! This module defines the [`EffectiveComponent`] type — the resolved,
//! final value and attributes for one employee/component/date pair — and the
//! [`Resolution`] outcome returned by the resolver.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CalculationMethod, ComponentKind, RecurrenceMode};

/// Where the resolved magnitude came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// The definition's own fixed amount or percentage.
    Definition,
    /// An active, in-window employee override.
    Override,
}

/// The resolved configuration for one employee, component and date.
///
/// This is the contract with the payroll engine collaborator: it consumes
/// one `EffectiveComponent` per applicable component per employee per pay
/// period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveComponent {
    /// The id of the resolved component definition.
    pub component_id: String,
    /// Whether this is an earning, deduction or allowance.
    pub kind: ComponentKind,
    /// How the value is calculated, inherited from the definition.
    pub calculation_method: CalculationMethod,
    /// The resolved magnitude (currency amount or percentage).
    pub value: Decimal,
    /// Recurrence basis, inherited from the definition.
    pub mode: RecurrenceMode,
    /// Taxability, inherited from the definition.
    pub is_taxable: bool,
    /// Whether the value came from the definition or an override.
    pub source: ValueSource,
}

/// Why a component did not resolve to an effective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotApplicableReason {
    /// The definition's status is inactive.
    DefinitionInactive,
    /// The evaluation date is before the definition's start date.
    DefinitionNotYetEffective,
    /// The evaluation date is after the definition's end date.
    DefinitionExpired,
    /// Neither the definition nor an applicable override carries a value
    /// matching the calculation method.
    NoValueConfigured,
}

/// The outcome of resolving one definition/assignment pair at a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Resolution {
    /// The component applies; the payload feeds payroll processing.
    Applicable(EffectiveComponent),
    /// The component does not apply at the evaluation date.
    NotApplicable {
        /// Why the component was suppressed.
        reason: NotApplicableReason,
    },
}

impl Resolution {
    /// Returns the effective component when the resolution is applicable.
    pub fn applicable(&self) -> Option<&EffectiveComponent> {
        match self {
            Resolution::Applicable(effective) => Some(effective),
            Resolution::NotApplicable { .. } => None,
        }
    }
}
