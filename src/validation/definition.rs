//! Validation rules for component definitions.

use rust_decimal::Decimal;

use crate::models::{CalculationMethod, DefinitionDraft, RecurrenceMode};

use super::errors::{into_result, FieldError, ValidationErrors};

/// Minimum accepted length of a component name, after trimming.
pub const MIN_NAME_LENGTH: usize = 2;
/// Maximum accepted length of a component name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Validates a candidate component definition.
///
/// All rules are evaluated together rather than short-circuited, so every
/// violation is reported in one pass:
///
/// 1. `name` is non-empty and between 2 and 100 characters;
/// 2. percentage components must use the monthly mode;
/// 3. exactly one of `fixed_amount` / `percentage` is populated, and the
///    populated field matches `calculation_method`;
/// 4. populated values must not be negative;
/// 5. `end_date` must be on or after `start_date` when both are present.
///
/// The same function guards both the create path and the update path; the
/// store re-validates the patched definition in full before persisting.
///
/// # Examples
///
/// ```
/// use component_engine::models::{
///     CalculationMethod, ComponentKind, DefinitionDraft, RecurrenceMode,
/// };
/// use component_engine::validation::validate_definition;
/// use rust_decimal::Decimal;
///
/// let draft = DefinitionDraft {
///     name: "Staff Loan".to_string(),
///     kind: ComponentKind::Deduction,
///     calculation_method: CalculationMethod::FixedAmount,
///     mode: RecurrenceMode::Monthly,
///     fixed_amount: Some(Decimal::new(500, 0)),
///     percentage: None,
///     is_taxable: false,
///     status: None,
///     start_date: None,
///     end_date: None,
/// };
/// assert!(validate_definition(&draft).is_ok());
/// ```
pub fn validate_definition(draft: &DefinitionDraft) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_name(&draft.name, &mut errors);

    if draft.calculation_method == CalculationMethod::Percentage
        && draft.mode != RecurrenceMode::Monthly
    {
        errors.push(FieldError::new(
            "mode",
            "must be monthly for percentage components",
        ));
    }

    check_value_pair(
        draft.calculation_method,
        draft.fixed_amount,
        draft.percentage,
        ValueFields {
            amount: "fixed_amount",
            percentage: "percentage",
        },
        true,
        &mut errors,
    );

    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if end < start {
            errors.push(FieldError::new(
                "end_date",
                "must be on or after start_date",
            ));
        }
    }

    into_result(errors)
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("name", "must not be empty"));
    } else if trimmed.chars().count() < MIN_NAME_LENGTH
        || trimmed.chars().count() > MAX_NAME_LENGTH
    {
        errors.push(FieldError::new(
            "name",
            format!(
                "must be between {} and {} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            ),
        ));
    }
}

/// The field names the value-pair rule attaches errors to. Definitions use
/// `fixed_amount`/`percentage`; assignments rename them to
/// `custom_amount`/`custom_percentage`.
pub(super) struct ValueFields {
    pub amount: &'static str,
    pub percentage: &'static str,
}

/// Checks the mutual-exclusivity and method-matching rule shared by
/// definitions and assignment overrides.
///
/// When `required` is true the method-matching field must be populated
/// (definitions always carry a value); when false an empty pair is accepted
/// (an assignment without any override is valid).
pub(super) fn check_value_pair(
    method: CalculationMethod,
    amount: Option<Decimal>,
    percentage: Option<Decimal>,
    fields: ValueFields,
    required: bool,
    errors: &mut Vec<FieldError>,
) {
    match method {
        CalculationMethod::FixedAmount => {
            if percentage.is_some() {
                errors.push(FieldError::new(
                    fields.percentage,
                    "must not be set for fixed-amount components",
                ));
            }
            if required && amount.is_none() {
                errors.push(FieldError::new(
                    fields.amount,
                    "is required for fixed-amount components",
                ));
            }
        }
        CalculationMethod::Percentage => {
            if amount.is_some() {
                errors.push(FieldError::new(
                    fields.amount,
                    "must not be set for percentage components",
                ));
            }
            if required && percentage.is_none() {
                errors.push(FieldError::new(
                    fields.percentage,
                    "is required for percentage components",
                ));
            }
        }
    }

    if let Some(value) = amount {
        if value < Decimal::ZERO {
            errors.push(FieldError::new(fields.amount, "must not be negative"));
        }
    }
    if let Some(value) = percentage {
        if value < Decimal::ZERO {
            errors.push(FieldError::new(fields.percentage, "must not be negative"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentKind;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fixed_draft() -> DefinitionDraft {
        DefinitionDraft {
            name: "Transport Allowance".to_string(),
            kind: ComponentKind::Allowance,
            calculation_method: CalculationMethod::FixedAmount,
            mode: RecurrenceMode::Monthly,
            fixed_amount: Some(dec("1000")),
            percentage: None,
            is_taxable: true,
            status: None,
            start_date: None,
            end_date: None,
        }
    }

    fn percentage_draft() -> DefinitionDraft {
        DefinitionDraft {
            name: "Housing Allowance".to_string(),
            kind: ComponentKind::Allowance,
            calculation_method: CalculationMethod::Percentage,
            mode: RecurrenceMode::Monthly,
            fixed_amount: None,
            percentage: Some(dec("12.5")),
            is_taxable: true,
            status: None,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn test_valid_fixed_amount_definition() {
        assert!(validate_definition(&fixed_draft()).is_ok());
    }

    #[test]
    fn test_valid_percentage_definition() {
        assert!(validate_definition(&percentage_draft()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut draft = fixed_draft();
        draft.name = "   ".to_string();
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_single_character_name_rejected() {
        let mut draft = fixed_draft();
        draft.name = "X".to_string();
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut draft = fixed_draft();
        draft.name = "a".repeat(101);
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_hundred_character_name_accepted() {
        let mut draft = fixed_draft();
        draft.name = "a".repeat(100);
        assert!(validate_definition(&draft).is_ok());
    }

    #[test]
    fn test_percentage_with_weekly_mode_rejected() {
        let mut draft = percentage_draft();
        draft.mode = RecurrenceMode::Weekly;
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("mode"));
    }

    #[test]
    fn test_percentage_with_hourly_mode_rejected() {
        let mut draft = percentage_draft();
        draft.mode = RecurrenceMode::Hourly;
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("mode"));
    }

    #[test]
    fn test_fixed_amount_with_any_mode_accepted() {
        for mode in [
            RecurrenceMode::Monthly,
            RecurrenceMode::Weekly,
            RecurrenceMode::Daily,
            RecurrenceMode::Hourly,
        ] {
            let mut draft = fixed_draft();
            draft.mode = mode;
            assert!(validate_definition(&draft).is_ok(), "mode {:?}", mode);
        }
    }

    #[test]
    fn test_both_values_populated_rejected() {
        let mut draft = fixed_draft();
        draft.percentage = Some(dec("10"));
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("percentage"));
    }

    #[test]
    fn test_missing_matching_value_rejected() {
        let mut draft = fixed_draft();
        draft.fixed_amount = None;
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("fixed_amount"));
    }

    #[test]
    fn test_mismatched_value_rejected_with_both_fields_named() {
        let mut draft = fixed_draft();
        draft.fixed_amount = None;
        draft.percentage = Some(dec("10"));
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("fixed_amount"));
        assert!(errors.has_field("percentage"));
    }

    #[test]
    fn test_negative_fixed_amount_rejected() {
        let mut draft = fixed_draft();
        draft.fixed_amount = Some(dec("-1"));
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("fixed_amount"));
    }

    #[test]
    fn test_negative_percentage_rejected() {
        let mut draft = percentage_draft();
        draft.percentage = Some(dec("-0.5"));
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("percentage"));
    }

    #[test]
    fn test_zero_values_accepted() {
        let mut draft = fixed_draft();
        draft.fixed_amount = Some(Decimal::ZERO);
        assert!(validate_definition(&draft).is_ok());
    }

    #[test]
    fn test_end_date_before_start_date_rejected() {
        let mut draft = fixed_draft();
        draft.start_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        draft.end_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("end_date"));
    }

    #[test]
    fn test_equal_start_and_end_date_accepted() {
        let mut draft = fixed_draft();
        draft.start_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        draft.end_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert!(validate_definition(&draft).is_ok());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let draft = DefinitionDraft {
            name: "".to_string(),
            kind: ComponentKind::Earning,
            calculation_method: CalculationMethod::Percentage,
            mode: RecurrenceMode::Weekly,
            fixed_amount: Some(dec("-5")),
            percentage: Some(dec("-10")),
            is_taxable: false,
            status: None,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        };

        let errors = validate_definition(&draft).unwrap_err();
        assert!(errors.has_field("name"));
        assert!(errors.has_field("mode"));
        assert!(errors.has_field("fixed_amount"));
        assert!(errors.has_field("percentage"));
        assert!(errors.has_field("end_date"));
        assert!(errors.len() >= 5);
    }
}
