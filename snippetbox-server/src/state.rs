//! Application state shared across handlers

use std::sync::Arc;

use crate::db::SnippetStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn SnippetStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SnippetStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn SnippetStore {
        self.store.as_ref()
    }
}
