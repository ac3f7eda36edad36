//! Application state for the payroll component engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::store::ComponentStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers, chiefly
/// the component store over its persistence collaborator.
#[derive(Clone)]
pub struct AppState {
    store: ComponentStore,
}

impl AppState {
    /// Creates a new application state with the given store.
    pub fn new(store: ComponentStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the component store.
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }
}
