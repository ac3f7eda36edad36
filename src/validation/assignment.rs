//! Validation rules for employee assignments.

use crate::models::{AssignmentDraft, CalculationMethod};

use super::definition::{check_value_pair, ValueFields};
use super::errors::{into_result, FieldError, ValidationErrors};

/// Validates a candidate employee assignment against the calculation method
/// of the definition it references.
///
/// The rule set mirrors [`validate_definition`](super::validate_definition)
/// with field renames: at most one of `custom_amount` / `custom_percentage`
/// may be populated, the populated one must match the definition's method,
/// values must not be negative, and `end_date` must be on or after
/// `effective_date` when present. An assignment with no custom value at all
/// is valid — it attaches the component without overriding it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use component_engine::models::{AssignmentDraft, CalculationMethod};
/// use component_engine::validation::validate_assignment;
/// use rust_decimal::Decimal;
///
/// let draft = AssignmentDraft {
///     component_id: "comp_001".to_string(),
///     company_id: "org_001".to_string(),
///     custom_amount: Some(Decimal::new(200, 0)),
///     custom_percentage: None,
///     status: None,
///     effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: None,
/// };
/// assert!(validate_assignment(&draft, CalculationMethod::FixedAmount).is_ok());
/// ```
pub fn validate_assignment(
    draft: &AssignmentDraft,
    method: CalculationMethod,
) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if draft.component_id.trim().is_empty() {
        errors.push(FieldError::new("component_id", "must not be empty"));
    }

    check_value_pair(
        method,
        draft.custom_amount,
        draft.custom_percentage,
        ValueFields {
            amount: "custom_amount",
            percentage: "custom_percentage",
        },
        false,
        &mut errors,
    );

    if let Some(end) = draft.end_date {
        if end < draft.effective_date {
            errors.push(FieldError::new(
                "end_date",
                "must be on or after effective_date",
            ));
        }
    }

    into_result(errors)
}
