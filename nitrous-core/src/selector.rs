//! Cascading category → module selection
//!
//! Choosing a category starts a module-list fetch and hands back a
//! [`ModuleRequest`] ticket. Fetches may finish in any order; only the ticket
//! from the most recent `select_category` call is applied.

use tracing::debug;

use crate::error::{CatalogError, SelectorError};

/// Lifecycle of the module dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No category chosen yet
    Empty,
    /// Category chosen, module list fetch in flight
    Loading,
    /// Module list populated (possibly empty)
    Ready,
}

/// Ticket for an in-flight module-list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRequest {
    category: String,
    generation: u64,
}

impl ModuleRequest {
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// What `complete` did with a finished fetch
#[derive(Debug)]
pub enum Completion {
    /// Result installed as the current module list
    Applied,
    /// A newer category was selected since; result dropped
    Stale,
    /// Current fetch failed; module list left empty
    Failed(CatalogError),
}

/// Dependent selection state for the query form
#[derive(Debug)]
pub struct CascadeSelector {
    state: SelectorState,
    category: Option<String>,
    modules: Vec<String>,
    selected_module: Option<String>,
    generation: u64,
}

impl Default for CascadeSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeSelector {
    pub fn new() -> Self {
        Self {
            state: SelectorState::Empty,
            category: None,
            modules: Vec::new(),
            selected_module: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn selected_module(&self) -> Option<&str> {
        self.selected_module.as_deref()
    }

    /// Choose a category
    ///
    /// Clears the module list and module selection and supersedes any fetch
    /// still in flight. The caller fetches modules for the returned ticket and
    /// passes the outcome to [`CascadeSelector::complete`].
    pub fn select_category(&mut self, category: &str) -> ModuleRequest {
        self.generation += 1;
        self.state = SelectorState::Loading;
        self.category = Some(category.to_string());
        self.modules.clear();
        self.selected_module = None;

        debug!(
            category,
            generation = self.generation,
            "Category selected, loading modules"
        );

        ModuleRequest {
            category: category.to_string(),
            generation: self.generation,
        }
    }

    /// Apply the outcome of a module-list fetch
    pub fn complete(
        &mut self,
        request: ModuleRequest,
        outcome: Result<Vec<String>, CatalogError>,
    ) -> Completion {
        if request.generation != self.generation {
            debug!(
                category = request.category.as_str(),
                generation = request.generation,
                current = self.generation,
                "Discarding stale module list"
            );
            return Completion::Stale;
        }

        self.state = SelectorState::Ready;
        match outcome {
            Ok(modules) => {
                self.modules = modules;
                Completion::Applied
            }
            Err(e) => {
                self.modules.clear();
                Completion::Failed(e)
            }
        }
    }

    /// Choose a module from the current list
    pub fn select_module(&mut self, module: &str) -> Result<(), SelectorError> {
        if !self.modules.iter().any(|m| m == module) {
            return Err(SelectorError::UnknownModule {
                module: module.to_string(),
            });
        }

        self.selected_module = Some(module.to_string());
        Ok(())
    }

    /// Return to `Empty`, invalidating any in-flight fetch
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SelectorState::Empty;
        self.category = None;
        self.modules.clear();
        self.selected_module = None;
    }
}
