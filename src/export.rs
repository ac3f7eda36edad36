//! Row-oriented export projection of component definitions.
//!
//! The engine supplies the tabular data shape; CSV or PDF formatting is the
//! export collaborator's concern and stays outside this crate.

use serde::{Deserialize, Serialize};

use crate::models::{CalculationMethod, ComponentDefinition, ComponentStatus, RecurrenceMode};

/// The column names of an export row, in order.
pub const COLUMNS: [&str; 6] = [
    "id",
    "name",
    "calculation_method",
    "mode",
    "is_taxable",
    "status",
];

/// One row of the export table, one per component definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    /// The definition id.
    pub id: String,
    /// The component name.
    pub name: String,
    /// How the component's value is calculated.
    pub calculation_method: CalculationMethod,
    /// The recurrence basis.
    pub mode: RecurrenceMode,
    /// Whether the component is taxable.
    pub is_taxable: bool,
    /// The activation status.
    pub status: ComponentStatus,
}

impl From<&ComponentDefinition> for ComponentRow {
    fn from(definition: &ComponentDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            calculation_method: definition.calculation_method,
            mode: definition.mode,
            is_taxable: definition.is_taxable,
            status: definition.status,
        }
    }
}

/// Projects definitions into export rows, one row per definition, preserving
/// the input order.
pub fn export_rows(definitions: &[ComponentDefinition]) -> Vec<ComponentRow> {
    definitions.iter().map(ComponentRow::from).collect()
}
