//! # Session Module
//!
//! Caller-owned holder for the current `State`.
//!
//! The engine itself is a set of pure functions. A `Session` is the
//! convenience a host (CLI, UI event loop) keeps to thread the latest state
//! from one user action to the next. There is no global session: each
//! caller creates and owns its own.

use crate::catalog::Catalog;
use crate::report::StatusReport;
use crate::selection::SelectionEngine;
use crate::state::State;
use crate::{ConfiguratorError, OptionId, Status};
use std::sync::Arc;

/// A Session wraps the latest `State` and replaces it on each transition.
#[derive(Debug, Clone)]
pub struct Session {
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_catalog(Catalog::baseline())
    }
}

impl Session {
    /// Create a session over the baseline catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over the given catalog with nothing selected.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            state: State::new(Arc::new(catalog)),
        }
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn with_state(state: State) -> Self {
        Self { state }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Status of one option under the current state.
    pub fn status(&self, option: &OptionId) -> Result<Status, ConfiguratorError> {
        SelectionEngine::get_status(&self.state, option)
    }

    /// Select an option.
    pub fn select(&mut self, option: &OptionId) -> Result<&State, ConfiguratorError> {
        self.state = SelectionEngine::select_option(&self.state, option)?;
        Ok(&self.state)
    }

    /// Deselect an option.
    pub fn deselect(&mut self, option: &OptionId) -> Result<&State, ConfiguratorError> {
        self.state = SelectionEngine::deselect_option(&self.state, option)?;
        Ok(&self.state)
    }

    /// Toggle an option.
    pub fn toggle(&mut self, option: &OptionId) -> Result<&State, ConfiguratorError> {
        self.state = SelectionEngine::toggle_option(&self.state, option)?;
        Ok(&self.state)
    }

    /// Toggle each option in order.
    ///
    /// All or nothing: if any toggle fails the session keeps its prior state.
    pub fn apply_toggles(&mut self, options: &[OptionId]) -> Result<&State, ConfiguratorError> {
        let next = options.iter().try_fold(self.state.clone(), |state, option| {
            SelectionEngine::toggle_option(&state, option)
        })?;
        self.state = next;
        Ok(&self.state)
    }

    /// Drop the selection, keep the catalog.
    pub fn reset(&mut self) {
        self.state = self.state.cleared();
    }

    /// Report over the current state.
    pub fn report(&self) -> Result<StatusReport, ConfiguratorError> {
        StatusReport::from_state(&self.state)
    }
}

// =============================================================================
// TESTS
// =============================================================================
