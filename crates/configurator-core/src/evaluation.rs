//! # Rule Evaluation
//!
//! One evaluation function per `RuleKind`, dispatched by `match`.
//!
//! Each function answers a single question: does this rule, under the
//! current selection, disable the given option? Nothing is cached; the
//! selection engine calls back in on every status query.

use crate::state::State;
use crate::{OptionId, Rule, RuleKind};

/// Check whether `rule` disables `option` in `state`.
///
/// `OO` and `NW` only apply once the rule is active.
#[must_use]
pub fn rule_disables(state: &State, rule: &Rule, option: &OptionId) -> bool {
    if rule.kind.requires_activation() && !state.is_rule_active(&rule.id) {
        return false;
    }

    match rule.kind {
        RuleKind::OneOf => one_of_disables(state, rule),
        RuleKind::RequireOne => require_one_disables(state, rule, option),
        RuleKind::RequireAll => require_all_disables(state, rule, option),
        RuleKind::NotWithout => not_without_disables(state, rule, option),
    }
}

/// `OO`: any selected child blocks every member.
fn one_of_disables(state: &State, rule: &Rule) -> bool {
    rule.child_options.iter().any(|c| state.contains(c))
}

/// `RO`: the parent is blocked until at least one child is selected.
fn require_one_disables(state: &State, rule: &Rule, option: &OptionId) -> bool {
    rule.is_parent(option) && !rule.child_options.iter().any(|c| state.contains(c))
}

/// `RA`: the parent is blocked until every child is selected.
fn require_all_disables(state: &State, rule: &Rule, option: &OptionId) -> bool {
    rule.is_parent(option) && !rule.child_options.iter().all(|c| state.contains(c))
}

/// `NW`: any other selected member blocks the option.
fn not_without_disables(state: &State, rule: &Rule, option: &OptionId) -> bool {
    rule.members()
        .into_iter()
        .any(|m| m != option && state.contains(m))
}

// =============================================================================
// TESTS
// =============================================================================
