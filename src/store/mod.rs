//! The component definition store and its persistence boundary.
//!
//! This module holds the authoritative definitions and assignments per
//! organization behind [`ComponentStore`], which validates every mutation
//! through the shared rule set before handing records to the persistence
//! collaborator. The collaborator is the [`ComponentRepository`] trait; the
//! engine never implements HTTP, serialization or cookies itself.

mod component_store;
mod repository;

pub use component_store::{BulkOutcome, ComponentStore};
pub use repository::{ComponentRepository, InMemoryRepository};
