//! Employee assignment model and related types.
//!
//! This module defines the [`EmployeeAssignment`] struct binding one
//! component definition to one employee, optionally overriding the
//! definition's magnitude for that employee alone.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ComponentStatus;

/// Binds one component definition to one employee.
///
/// An assignment may carry a custom amount or percentage that supersedes the
/// definition's own value while the assignment is active and in window.
/// Overrides only ever change the magnitude; method, mode and taxability are
/// always inherited from the definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAssignment {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// The employee this assignment applies to. Immutable after creation.
    pub employee_id: String,
    /// The component definition being assigned. Immutable after creation.
    pub component_id: String,
    /// The company/tenant scope of the assignment.
    pub company_id: String,
    /// Custom fixed amount overriding the definition's `fixed_amount`.
    #[serde(default)]
    pub custom_amount: Option<Decimal>,
    /// Custom percentage overriding the definition's `percentage`.
    #[serde(default)]
    pub custom_percentage: Option<Decimal>,
    /// Activation status of the assignment.
    pub status: ComponentStatus,
    /// The date the override becomes active (inclusive).
    pub effective_date: NaiveDate,
    /// Optional date the override ceases to apply (inclusive). Once past,
    /// resolution falls back to the definition's own value.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EmployeeAssignment {
    /// Returns true if the assignment carries any custom value.
    pub fn has_override(&self) -> bool {
        self.custom_amount.is_some() || self.custom_percentage.is_some()
    }
}

/// A candidate assignment submitted for creation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDraft {
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
    /// The date the override becomes active (inclusive).
    pub effective_date: NaiveDate,
    /// Optional date the override ceases to apply (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// A partial update to an existing assignment.
///
/// `None` means "leave unchanged". `component_id` is present so the store
/// can reject attempts to repoint an assignment at a different definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPatch {
    /// Immutable after creation; rejected when changed.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_assignment() -> EmployeeAssignment {
        EmployeeAssignment {
            id: "asn_001".to_string(),
            employee_id: "emp_001".to_string(),
            component_id: "comp_001".to_string(),
            company_id: "org_001".to_string(),
            custom_amount: Some(Decimal::new(20000, 2)),
            custom_percentage: None,
            status: ComponentStatus::Active,
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
        }
    }

    #[test]
    fn test_has_override_with_custom_amount() {
        let assignment = create_test_assignment();
        assert!(assignment.has_override());
    }

    #[test]
    fn test_has_override_without_custom_values() {
        let mut assignment = create_test_assignment();
        assignment.custom_amount = None;
        assert!(!assignment.has_override());
    }

    #[test]
    fn test_assignment_serde_round_trip() {
        let assignment = create_test_assignment();
        let json = serde_json::to_string(&assignment).unwrap();
        let deserialized: EmployeeAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(assignment, deserialized);
    }

    #[test]
    fn test_deserialize_assignment_without_optional_fields() {
        let json = r#"{
            "id": "asn_002",
            "employee_id": "emp_002",
            "component_id": "comp_001",
            "company_id": "org_001",
            "status": "active",
            "effective_date": "2024-01-01"
        }"#;

        let assignment: EmployeeAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.custom_amount, None);
        assert_eq!(assignment.custom_percentage, None);
        assert_eq!(assignment.end_date, None);
        assert!(!assignment.has_override());
    }

    #[test]
    fn test_deserialize_draft() {
        let json = r#"{
            "component_id": "comp_001",
            "company_id": "org_001",
            "custom_amount": "200",
            "effective_date": "2024-01-01",
            "end_date": "2024-06-30"
        }"#;

        let draft: AssignmentDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.custom_amount, Some(Decimal::new(200, 0)));
        assert_eq!(draft.status, None);
        assert_eq!(
            draft.end_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        );
    }

    #[test]
    fn test_patch_default_changes_nothing() {
        let patch = AssignmentPatch::default();
        assert_eq!(patch.component_id, None);
        assert_eq!(patch.custom_amount, None);
        assert_eq!(patch.status, None);
    }
}
