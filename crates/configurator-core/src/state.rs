//! # Selection State
//!
//! The value every engine operation consumes and produces.
//!
//! A `State` pairs the shared, read-only catalog with the running selection.
//! Transitions never mutate a `State` in place; they build the next one and
//! share the catalog through an `Arc`.

use crate::catalog::Catalog;
use crate::{OptionId, RuleId};
use std::sync::Arc;

/// Catalog plus current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Shared catalog. Identical across every state derived from one build.
    pub(crate) catalog: Arc<Catalog>,

    /// Selected option ids in selection order. Each id appears at most once.
    pub(crate) selected: Vec<OptionId>,

    /// Active rule multiset: one entry per rule membership of each
    /// selected option, in insertion order.
    pub(crate) active_rules: Vec<RuleId>,
}

impl State {
    /// Create the initial state: nothing selected, no rule active.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected: Vec::new(),
            active_rules: Vec::new(),
        }
    }

    /// Initial state over the baseline catalog.
    #[must_use]
    pub fn baseline() -> Self {
        Self::new(Arc::new(Catalog::baseline()))
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A handle on the shared catalog, for building sibling states.
    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Selected option ids, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[OptionId] {
        &self.selected
    }

    /// Active rule ids, with multiplicity.
    #[must_use]
    pub fn active_rules(&self) -> &[RuleId] {
        &self.active_rules
    }

    /// Membership test on the selection. Does not validate the id.
    #[must_use]
    pub fn contains(&self, option: &OptionId) -> bool {
        self.selected.contains(option)
    }

    /// Whether at least one entry for the rule is in the active multiset.
    #[must_use]
    pub fn is_rule_active(&self, rule: &RuleId) -> bool {
        self.active_rules.contains(rule)
    }

    /// Number of entries for the rule in the active multiset.
    #[must_use]
    pub fn activation_count(&self, rule: &RuleId) -> usize {
        self.active_rules.iter().filter(|r| *r == rule).count()
    }

    /// Same catalog, empty selection.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new(self.catalog_handle())
    }
}

// =============================================================================
// TESTS
// =============================================================================
