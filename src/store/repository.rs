//! The persistence collaborator boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};
use crate::models::{ComponentDefinition, EmployeeAssignment};

/// The persistence collaborator the store delegates all I/O to.
///
/// Implementations own transport concerns (HTTP, database, retries); the
/// engine calls these methods synchronously and surfaces any failure as
/// [`EngineError::PersistenceUnavailable`], distinct from validation
/// failures, so callers never conflate bad input with an unavailable
/// backend.
pub trait ComponentRepository: Send + Sync {
    /// Loads every definition belonging to the organization, any status.
    fn load_definitions(&self, organization_id: &str) -> EngineResult<Vec<ComponentDefinition>>;

    /// Persists a definition, inserting or replacing by id.
    fn save_definition(
        &self,
        definition: ComponentDefinition,
    ) -> EngineResult<ComponentDefinition>;

    /// Loads every assignment belonging to the employee, any status.
    fn load_assignments(&self, employee_id: &str) -> EngineResult<Vec<EmployeeAssignment>>;

    /// Persists an assignment, inserting or replacing by id.
    fn save_assignment(&self, assignment: EmployeeAssignment)
        -> EngineResult<EmployeeAssignment>;
}

/// An in-memory repository backed by hash maps.
///
/// Used by the HTTP surface and the test suites. Listing order is not
/// guaranteed by the repository contract; this implementation sorts by id so
/// reads are deterministic.
#[derive(Default)]
pub struct InMemoryRepository {
    definitions: Mutex<HashMap<String, ComponentDefinition>>,
    assignments: Mutex<HashMap<String, EmployeeAssignment>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::PersistenceUnavailable {
        message: "in-memory state lock poisoned".to_string(),
    }
}

impl ComponentRepository for InMemoryRepository {
    fn load_definitions(&self, organization_id: &str) -> EngineResult<Vec<ComponentDefinition>> {
        let definitions = self.definitions.lock().map_err(|_| poisoned())?;
        let mut matched: Vec<ComponentDefinition> = definitions
            .values()
            .filter(|d| d.organization_id == organization_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matched)
    }

    fn save_definition(
        &self,
        definition: ComponentDefinition,
    ) -> EngineResult<ComponentDefinition> {
        let mut definitions = self.definitions.lock().map_err(|_| poisoned())?;
        definitions.insert(definition.id.clone(), definition.clone());
        Ok(definition)
    }

    fn load_assignments(&self, employee_id: &str) -> EngineResult<Vec<EmployeeAssignment>> {
        let assignments = self.assignments.lock().map_err(|_| poisoned())?;
        let mut matched: Vec<EmployeeAssignment> = assignments
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matched)
    }

    fn save_assignment(
        &self,
        assignment: EmployeeAssignment,
    ) -> EngineResult<EmployeeAssignment> {
        let mut assignments = self.assignments.lock().map_err(|_| poisoned())?;
        assignments.insert(assignment.id.clone(), assignment.clone());
        Ok(assignment)
    }
}
