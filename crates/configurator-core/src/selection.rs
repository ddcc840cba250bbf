//! # Selection Engine
//!
//! Status queries and selection transitions over a `State`.
//!
//! All transitions are:
//! - Pure: `&State` in, new `State` out, input never touched
//! - Validated first: an unknown option fails before anything is built
//! - Unconditional: selecting a disabled option is applied as asked;
//!   gating on `Status::Available` is the caller's job

use crate::evaluation::rule_disables;
use crate::state::State;
use crate::{ConfiguratorError, OptionId, Status};

/// The SelectionEngine groups every query and transition on `State`.
pub struct SelectionEngine;

impl SelectionEngine {
    /// Observable status of an option.
    ///
    /// Selection wins over disablement: a selected option is reported
    /// `Selected` even if a rule would block it now.
    pub fn get_status(state: &State, option: &OptionId) -> Result<Status, ConfiguratorError> {
        if Self::is_selected(state, option)? {
            return Ok(Status::Selected);
        }

        if Self::is_disabled(state, option)? {
            return Ok(Status::Disabled);
        }

        Ok(Status::Available)
    }

    /// Whether the option is in the current selection.
    pub fn is_selected(state: &State, option: &OptionId) -> Result<bool, ConfiguratorError> {
        state.catalog().require_option(option)?;
        Ok(state.contains(option))
    }

    /// Whether any rule the option belongs to blocks it.
    ///
    /// Rules are checked in the option's own order and the first blocking
    /// rule short-circuits.
    pub fn is_disabled(state: &State, option: &OptionId) -> Result<bool, ConfiguratorError> {
        let catalog = state.catalog();
        let opt = catalog.require_option(option)?;

        Ok(catalog
            .rules_of(opt)
            .any(|rule| rule_disables(state, rule, option)))
    }

    /// Add an option to the selection and activate each of its rules.
    ///
    /// Every rule membership contributes one active entry. Selecting an
    /// already-selected option returns an unchanged copy.
    pub fn select_option(state: &State, option: &OptionId) -> Result<State, ConfiguratorError> {
        let opt = state.catalog().require_option(option)?;

        let mut next = state.clone();
        if state.contains(option) {
            return Ok(next);
        }

        next.selected.push(option.clone());
        next.active_rules.extend(opt.rules.iter().cloned());

        Ok(next)
    }

    /// Remove an option from the selection.
    ///
    /// For each rule the option belongs to, one active entry is dropped only
    /// when the option is the last selected member of that rule, counted
    /// against the selection before removal. A member is any option that
    /// lists the rule, which also covers a parent displaced by a later
    /// primary entry. Deselecting an option that is not selected returns an
    /// unchanged copy.
    pub fn deselect_option(state: &State, option: &OptionId) -> Result<State, ConfiguratorError> {
        let catalog = state.catalog();
        let opt = catalog.require_option(option)?;

        let mut next = state.clone();
        if !state.contains(option) {
            return Ok(next);
        }

        next.selected.retain(|id| id != option);

        for rule in catalog.rules_of(opt) {
            let selected_members = state
                .selected()
                .iter()
                .filter_map(|s| catalog.option(s))
                .filter(|o| o.belongs_to(&rule.id))
                .count();

            if selected_members != 1 {
                continue;
            }

            if let Some(pos) = next.active_rules.iter().position(|r| *r == rule.id) {
                next.active_rules.remove(pos);
            }
        }

        Ok(next)
    }

    /// Deselect if selected, select otherwise.
    pub fn toggle_option(state: &State, option: &OptionId) -> Result<State, ConfiguratorError> {
        if Self::is_selected(state, option)? {
            Self::deselect_option(state, option)
        } else {
            Self::select_option(state, option)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
