//! # Status Report
//!
//! A snapshot of every option's status under one `State`, in catalog order.
//! The binary renders it as text (`"<name>: <STATUS>"` per line) or JSON.

use crate::selection::SelectionEngine;
use crate::state::State;
use crate::{ConfiguratorError, OptionId, RuleId, Status};
use serde::Serialize;
use std::fmt;

/// One option's line in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    /// Option identifier.
    pub id: OptionId,
    /// Display label.
    pub name: String,
    /// Classification tag, omitted from JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Status under the report's state.
    pub status: Status,
}

/// Status of every option plus the selection it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// One line per option, in catalog order.
    pub options: Vec<StatusLine>,
    /// Selected options, in selection order.
    pub selected: Vec<OptionId>,
    /// Active rule multiset.
    pub active_rules: Vec<RuleId>,
}

impl StatusReport {
    /// Evaluate every option in `state`.
    pub fn from_state(state: &State) -> Result<Self, ConfiguratorError> {
        let options = state
            .catalog()
            .collection()
            .map(|option| {
                Ok(StatusLine {
                    id: option.id.clone(),
                    name: option.name.clone(),
                    category: option.category.clone(),
                    status: SelectionEngine::get_status(state, &option.id)?,
                })
            })
            .collect::<Result<Vec<_>, ConfiguratorError>>()?;

        Ok(Self {
            options,
            selected: state.selected().to_vec(),
            active_rules: state.active_rules().to_vec(),
        })
    }

    /// Number of options with the given status.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.options.iter().filter(|l| l.status == status).count()
    }

    /// Status of a single option, if it is in the report.
    #[must_use]
    pub fn status_of(&self, option: &OptionId) -> Option<Status> {
        self.options
            .iter()
            .find(|l| &l.id == option)
            .map(|l| l.status)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.options {
            writeln!(f, "{}: {}", line.name, line.status)?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
