//! # Catalog
//!
//! The static option/rule graph the selection engine evaluates against.
//!
//! A `Catalog` is assembled once by the `CatalogBuilder` and treated as
//! read-only afterwards. All maps are `BTreeMap` so iteration order (and
//! therefore every report rendered from it) is deterministic.

use crate::primitives::BASELINE_RULE_ID;
use crate::{ConfiguratorError, OptionId, ProductOption, Rule, RuleId, RuleKind};
use std::collections::BTreeMap;

/// Option and rule tables.
///
/// Referential closure holds by construction: every option id a rule names
/// is in `options`, and every rule id an option lists is in `rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Option storage: OptionId -> ProductOption
    pub(crate) options: BTreeMap<OptionId, ProductOption>,

    /// Rule storage: RuleId -> Rule
    pub(crate) rules: BTreeMap<RuleId, Rule>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The baseline catalog: nine paint colours in one `OO` rule.
    #[must_use]
    pub fn baseline() -> Self {
        const COLOURS: [(&str, &str); 9] = [
            ("20844", "Pearl - Arrow Grey"),
            ("27128", "Pearl - Misano Red"),
            ("93020", "Metallic - Glacier white"),
            ("104177", "Metallic - Mythos black"),
            ("105356", "Solid - Shell white"),
            ("111413", "Metallic - Manhattan grey"),
            ("122473", "Metallic - Firmament blue"),
            ("125093", "Metallic - Python yellow"),
            ("129827", "Special solid - Tioman green"),
        ];

        let rule_id = RuleId::new(BASELINE_RULE_ID);
        let mut rule = Rule::new(rule_id.clone(), RuleKind::OneOf);
        let mut catalog = Self::new();

        for (id, name) in COLOURS {
            let id = OptionId::new(id);
            let mut option = ProductOption::new(id.clone(), name, None);
            option.rules.push(rule_id.clone());
            rule.child_options.push(id.clone());
            catalog.options.insert(id, option);
        }
        catalog.rules.insert(rule_id, rule);

        catalog
    }

    /// Lookup an option.
    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&ProductOption> {
        self.options.get(id)
    }

    /// Lookup an option, failing with `UnknownOption`.
    pub fn require_option(&self, id: &OptionId) -> Result<&ProductOption, ConfiguratorError> {
        self.options
            .get(id)
            .ok_or_else(|| ConfiguratorError::UnknownOption(id.clone()))
    }

    /// Lookup a rule.
    #[must_use]
    pub fn rule(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.get(id)
    }

    /// Check if the catalog contains an option.
    #[must_use]
    pub fn contains_option(&self, id: &OptionId) -> bool {
        self.options.contains_key(id)
    }

    /// Get the total number of options.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Get the total number of rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Stable-order iteration over every option, for rendering.
    pub fn collection(&self) -> impl Iterator<Item = &ProductOption> {
        self.options.values()
    }

    /// Stable-order iteration over every rule.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Rules an option takes part in, in the option's own order.
    ///
    /// Repeated memberships yield the rule repeatedly.
    pub fn rules_of<'a>(
        &'a self,
        option: &'a ProductOption,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        option.rules.iter().filter_map(|id| self.rules.get(id))
    }
}

// =============================================================================
// TESTS
// =============================================================================
