//! The assignment/override resolver.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::lifecycle::{is_expired, is_in_effect};
use crate::models::{
    CalculationMethod, ComponentDefinition, EffectiveComponent, EmployeeAssignment,
    NotApplicableReason, Resolution, ValueSource,
};

/// Resolves one definition/assignment pair into the effective configuration
/// at an evaluation date.
///
/// Precedence order:
///
/// 1. an inactive definition never applies, regardless of assignment state;
/// 2. a definition whose validity window excludes the evaluation date never
///    applies, even while its status still reads active;
/// 3. an active, in-window assignment whose custom value matches the
///    definition's calculation method supersedes the definition's magnitude;
///    method, mode and taxability are always inherited from the definition;
/// 4. otherwise the definition's own value is used unmodified. An expired or
///    out-of-window override silently falls back to the definition.
///
/// The function is deterministic and side-effect free; it never reads the
/// clock, so callers control the evaluation date explicitly.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use component_engine::models::{
///     CalculationMethod, ComponentDefinition, ComponentKind, ComponentStatus, RecurrenceMode,
/// };
/// use component_engine::resolution::resolve;
/// use rust_decimal::Decimal;
///
/// let def = ComponentDefinition {
///     id: "comp_001".to_string(),
///     organization_id: "org_001".to_string(),
///     name: "Transport Allowance".to_string(),
///     kind: ComponentKind::Allowance,
///     calculation_method: CalculationMethod::FixedAmount,
///     mode: RecurrenceMode::Monthly,
///     fixed_amount: Some(Decimal::new(1000, 0)),
///     percentage: None,
///     is_taxable: true,
///     status: ComponentStatus::Active,
///     start_date: None,
///     end_date: None,
/// };
///
/// let on = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let resolution = resolve(&def, None, on);
/// assert_eq!(resolution.applicable().unwrap().value, Decimal::new(1000, 0));
/// ```
pub fn resolve(
    definition: &ComponentDefinition,
    assignment: Option<&EmployeeAssignment>,
    on: NaiveDate,
) -> Resolution {
    if !definition.status.is_active() {
        return Resolution::NotApplicable {
            reason: NotApplicableReason::DefinitionInactive,
        };
    }

    if let Some(start) = definition.start_date {
        if on < start {
            return Resolution::NotApplicable {
                reason: NotApplicableReason::DefinitionNotYetEffective,
            };
        }
    }
    if is_expired(definition.end_date, on) {
        return Resolution::NotApplicable {
            reason: NotApplicableReason::DefinitionExpired,
        };
    }

    if let Some(assignment) = assignment {
        if let Some(value) = override_value(definition, assignment, on) {
            return Resolution::Applicable(effective(definition, value, ValueSource::Override));
        }
    }

    match definition.value() {
        Some(value) => Resolution::Applicable(effective(definition, value, ValueSource::Definition)),
        None => Resolution::NotApplicable {
            reason: NotApplicableReason::NoValueConfigured,
        },
    }
}

/// Returns the applicable override magnitude, or `None` when the assignment
/// is inactive, out of window, or carries no value matching the definition's
/// calculation method.
fn override_value(
    definition: &ComponentDefinition,
    assignment: &EmployeeAssignment,
    on: NaiveDate,
) -> Option<Decimal> {
    if !is_in_effect(
        assignment.status,
        Some(assignment.effective_date),
        assignment.end_date,
        on,
    ) {
        return None;
    }

    match definition.calculation_method {
        CalculationMethod::FixedAmount => assignment.custom_amount,
        CalculationMethod::Percentage => assignment.custom_percentage,
    }
}

fn effective(
    definition: &ComponentDefinition,
    value: Decimal,
    source: ValueSource,
) -> EffectiveComponent {
    EffectiveComponent {
        component_id: definition.id.clone(),
        kind: definition.kind,
        calculation_method: definition.calculation_method,
        value,
        mode: definition.mode,
        is_taxable: definition.is_taxable,
        source,
    }
}

/// Resolves every definition against one employee's assignments and returns
/// the applicable effective components — the payroll input feed for that
/// employee at the evaluation date.
///
/// Assignments are matched to definitions by `component_id`; definitions
/// whose resolution is not applicable are omitted. Definitions already
/// filtered to one organization are expected; the function performs no
/// tenant scoping of its own.
pub fn resolve_all(
    definitions: &[ComponentDefinition],
    assignments: &[EmployeeAssignment],
    on: NaiveDate,
) -> Vec<EffectiveComponent> {
    definitions
        .iter()
        .filter_map(|definition| {
            let assignment = assignments
                .iter()
                .find(|a| a.component_id == definition.id);
            match resolve(definition, assignment, on) {
                Resolution::Applicable(effective) => Some(effective),
                Resolution::NotApplicable { .. } => None,
            }
        })
        .collect()
}
