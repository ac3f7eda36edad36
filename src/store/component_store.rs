//! The component definition store.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AssignmentDraft, AssignmentPatch, ComponentDefinition, ComponentStatus, DefinitionDraft,
    DefinitionPatch, EffectiveComponent, EmployeeAssignment,
};
use crate::resolution::resolve_all;
use crate::validation::{validate_assignment, validate_definition};

use super::repository::ComponentRepository;

/// The outcome of one record within a bulk update.
///
/// Bulk operations never abort the batch: each record is applied
/// independently and the caller reconciles its local state from this list.
#[derive(Debug)]
pub struct BulkOutcome {
    /// The id of the assignment the outcome belongs to.
    pub id: String,
    /// The per-record result: the updated assignment, or why it failed.
    pub result: EngineResult<EmployeeAssignment>,
}

/// Holds authoritative component definitions and assignments per
/// organization, guarding every mutation with the shared validators.
///
/// All operations take the organization or employee scope as an explicit
/// argument; the store reads no ambient state. Persistence is delegated to
/// the [`ComponentRepository`] collaborator, which is responsible for any
/// concurrency control (last-writer-wins or optimistic versioning).
#[derive(Clone)]
pub struct ComponentStore {
    repository: Arc<dyn ComponentRepository>,
}

impl ComponentStore {
    /// Creates a store over the given persistence collaborator.
    pub fn new(repository: Arc<dyn ComponentRepository>) -> Self {
        Self { repository }
    }

    /// Creates a component definition from a validated draft.
    ///
    /// Assigns a fresh id, defaults the status to active when the draft
    /// leaves it unspecified, and returns the persisted definition. A draft
    /// violating any configuration rule is rejected with every violation
    /// reported at once.
    pub fn create_definition(
        &self,
        organization_id: &str,
        draft: DefinitionDraft,
    ) -> EngineResult<ComponentDefinition> {
        validate_definition(&draft)?;

        let definition = ComponentDefinition {
            id: Uuid::new_v4().to_string(),
            organization_id: organization_id.to_string(),
            name: draft.name,
            kind: draft.kind,
            calculation_method: draft.calculation_method,
            mode: draft.mode,
            fixed_amount: draft.fixed_amount,
            percentage: draft.percentage,
            is_taxable: draft.is_taxable,
            status: draft.status.unwrap_or(ComponentStatus::Active),
            start_date: draft.start_date,
            end_date: draft.end_date,
        };

        info!(
            organization_id = %organization_id,
            component_id = %definition.id,
            name = %definition.name,
            "Created component definition"
        );
        self.repository.save_definition(definition)
    }

    /// Applies a partial update to an existing definition.
    ///
    /// `name`, `calculation_method` and `mode` are immutable after creation;
    /// a patch that supplies a different value for any of them is rejected
    /// with [`EngineError::ImmutableField`]. Echoing the current value back
    /// unchanged is tolerated. The patched definition passes through the
    /// same validator as the create path before it is persisted.
    pub fn update_definition(
        &self,
        organization_id: &str,
        id: &str,
        patch: &DefinitionPatch,
    ) -> EngineResult<ComponentDefinition> {
        let mut definition = self.find_definition(organization_id, id)?;

        if let Some(name) = &patch.name {
            if *name != definition.name {
                return Err(EngineError::ImmutableField {
                    field: "name".to_string(),
                });
            }
        }
        if let Some(method) = patch.calculation_method {
            if method != definition.calculation_method {
                return Err(EngineError::ImmutableField {
                    field: "calculation_method".to_string(),
                });
            }
        }
        if let Some(mode) = patch.mode {
            if mode != definition.mode {
                return Err(EngineError::ImmutableField {
                    field: "mode".to_string(),
                });
            }
        }

        if let Some(amount) = patch.fixed_amount {
            definition.fixed_amount = Some(amount);
        }
        if let Some(percentage) = patch.percentage {
            definition.percentage = Some(percentage);
        }
        if let Some(is_taxable) = patch.is_taxable {
            definition.is_taxable = is_taxable;
        }
        if let Some(status) = patch.status {
            definition.status = status;
        }
        if let Some(start_date) = patch.start_date {
            definition.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            definition.end_date = Some(end_date);
        }

        validate_definition(&definition_draft(&definition))?;

        debug!(
            organization_id = %organization_id,
            component_id = %id,
            "Updated component definition"
        );
        self.repository.save_definition(definition)
    }

    /// Flips a definition between active and inactive.
    ///
    /// Deactivation is the deletion mechanism; history is preserved.
    pub fn toggle_definition_status(
        &self,
        organization_id: &str,
        id: &str,
    ) -> EngineResult<ComponentDefinition> {
        let mut definition = self.find_definition(organization_id, id)?;
        definition.status = definition.status.toggled();
        info!(
            organization_id = %organization_id,
            component_id = %id,
            status = ?definition.status,
            "Toggled component status"
        );
        self.repository.save_definition(definition)
    }

    /// Returns all definitions for the organization, any status.
    ///
    /// Consumers re-sort as needed; no ordering is promised.
    pub fn list_by_organization(
        &self,
        organization_id: &str,
    ) -> EngineResult<Vec<ComponentDefinition>> {
        self.repository.load_definitions(organization_id)
    }

    /// Attaches a component to an employee, optionally with an override.
    ///
    /// The referenced definition must exist within the draft's company
    /// scope, and any custom value must match that definition's calculation
    /// method.
    pub fn create_assignment(
        &self,
        employee_id: &str,
        draft: AssignmentDraft,
    ) -> EngineResult<EmployeeAssignment> {
        let definition = self.find_definition(&draft.company_id, &draft.component_id)?;
        validate_assignment(&draft, definition.calculation_method)?;

        let assignment = EmployeeAssignment {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            component_id: draft.component_id,
            company_id: draft.company_id,
            custom_amount: draft.custom_amount,
            custom_percentage: draft.custom_percentage,
            status: draft.status.unwrap_or(ComponentStatus::Active),
            effective_date: draft.effective_date,
            end_date: draft.end_date,
        };

        info!(
            employee_id = %employee_id,
            assignment_id = %assignment.id,
            component_id = %assignment.component_id,
            "Created employee assignment"
        );
        self.repository.save_assignment(assignment)
    }

    /// Applies a partial update to an existing assignment.
    ///
    /// The assignment may not be repointed at a different definition; the
    /// patched assignment is re-validated against the referenced
    /// definition's calculation method before it is persisted.
    pub fn update_assignment(
        &self,
        employee_id: &str,
        id: &str,
        patch: &AssignmentPatch,
    ) -> EngineResult<EmployeeAssignment> {
        let assignments = self.repository.load_assignments(employee_id)?;
        let mut assignment = assignments
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| EngineError::AssignmentNotFound {
                id: id.to_string(),
                employee_id: employee_id.to_string(),
            })?;

        if let Some(component_id) = &patch.component_id {
            if *component_id != assignment.component_id {
                return Err(EngineError::ImmutableField {
                    field: "component_id".to_string(),
                });
            }
        }

        if let Some(amount) = patch.custom_amount {
            assignment.custom_amount = Some(amount);
        }
        if let Some(percentage) = patch.custom_percentage {
            assignment.custom_percentage = Some(percentage);
        }
        if let Some(status) = patch.status {
            assignment.status = status;
        }
        if let Some(effective_date) = patch.effective_date {
            assignment.effective_date = effective_date;
        }
        if let Some(end_date) = patch.end_date {
            assignment.end_date = Some(end_date);
        }

        let definition =
            self.find_definition(&assignment.company_id, &assignment.component_id)?;
        validate_assignment(&assignment_draft(&assignment), definition.calculation_method)?;

        debug!(
            employee_id = %employee_id,
            assignment_id = %id,
            "Updated employee assignment"
        );
        self.repository.save_assignment(assignment)
    }

    /// Applies a batch of assignment patches as independent single-record
    /// operations.
    ///
    /// Partial failure of one record never blocks or rolls back the others;
    /// the caller receives a per-record outcome list and decides whether to
    /// apply, partially apply, or discard its local state.
    pub fn bulk_update_assignments(
        &self,
        employee_id: &str,
        updates: Vec<(String, AssignmentPatch)>,
    ) -> Vec<BulkOutcome> {
        updates
            .into_iter()
            .map(|(id, patch)| {
                let result = self.update_assignment(employee_id, &id, &patch);
                BulkOutcome { id, result }
            })
            .collect()
    }

    /// Resolves the employee's effective components at the evaluation date —
    /// the input feed for payroll processing.
    pub fn effective_components(
        &self,
        organization_id: &str,
        employee_id: &str,
        on: NaiveDate,
    ) -> EngineResult<Vec<EffectiveComponent>> {
        let definitions = self.repository.load_definitions(organization_id)?;
        let assignments = self.repository.load_assignments(employee_id)?;
        let effectives = resolve_all(&definitions, &assignments, on);
        debug!(
            organization_id = %organization_id,
            employee_id = %employee_id,
            evaluation_date = %on,
            resolved = effectives.len(),
            "Resolved effective components"
        );
        Ok(effectives)
    }

    fn find_definition(
        &self,
        organization_id: &str,
        id: &str,
    ) -> EngineResult<ComponentDefinition> {
        self.repository
            .load_definitions(organization_id)?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| EngineError::DefinitionNotFound {
                id: id.to_string(),
                organization_id: organization_id.to_string(),
            })
    }
}

fn definition_draft(definition: &ComponentDefinition) -> DefinitionDraft {
    DefinitionDraft {
        name: definition.name.clone(),
        kind: definition.kind,
        calculation_method: definition.calculation_method,
        mode: definition.mode,
        fixed_amount: definition.fixed_amount,
        percentage: definition.percentage,
        is_taxable: definition.is_taxable,
        status: Some(definition.status),
        start_date: definition.start_date,
        end_date: definition.end_date,
    }
}

fn assignment_draft(assignment: &EmployeeAssignment) -> AssignmentDraft {
    AssignmentDraft {
        component_id: assignment.component_id.clone(),
        company_id: assignment.company_id.clone(),
        custom_amount: assignment.custom_amount,
        custom_percentage: assignment.custom_percentage,
        status: Some(assignment.status),
        effective_date: assignment.effective_date,
        end_date: assignment.end_date,
    }
}
