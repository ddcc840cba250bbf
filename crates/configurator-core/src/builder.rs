//! # Catalog Builder
//!
//! Validation and folding of flat catalog tuples into a `Catalog`.
//!
//! - Validate each entry before it touches the catalog
//! - Reject malformed input at build time, never at query time
//! - First occurrence wins on option name/category and on rule kind
//! - Option rule lists keep every append; rule child lists do not repeat

use crate::catalog::Catalog;
use crate::primitives::{MAX_CATALOG_ENTRIES, MAX_ID_LENGTH, MAX_NAME_LENGTH};
use crate::{
    CatalogEntry, ConfiguratorError, OptionId, PackContents, ProductOption, Rule, RuleId, RuleKind,
};

/// Incremental catalog builder.
///
/// Every step consumes the builder and returns the next one, so a fold over
/// entries never exposes a half-applied entry: a failing step returns the
/// error and drops nothing the caller still holds.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Create a builder over an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a catalog entry.
    ///
    /// An entry is valid if:
    /// - Rule id, option id and name are non-empty and within length limits
    /// - The kind is one of `OO`, `RO`, `RA`, `NW`
    ///
    /// Returns the parsed kind, or `InvalidCatalogEntry`.
    pub fn validate(entry: &CatalogEntry) -> Result<RuleKind, ConfiguratorError> {
        if entry.rule.is_empty() {
            return Err(entry.invalid("missing rule id"));
        }
        if entry.option.is_empty() {
            return Err(entry.invalid("missing option id"));
        }
        if entry.rule.len() > MAX_ID_LENGTH || entry.option.len() > MAX_ID_LENGTH {
            return Err(entry.invalid(format!("id longer than {} bytes", MAX_ID_LENGTH)));
        }
        if entry.name.is_empty() {
            return Err(entry.invalid("missing name"));
        }
        if entry.name.len() > MAX_NAME_LENGTH {
            return Err(entry.invalid(format!("name longer than {} bytes", MAX_NAME_LENGTH)));
        }

        entry
            .kind
            .parse::<RuleKind>()
            .map_err(|e| entry.invalid(e.to_string()))
    }

    /// Fold one flat tuple into the catalog.
    pub fn add_option(mut self, entry: CatalogEntry) -> Result<Self, ConfiguratorError> {
        let kind = Self::validate(&entry)?;

        let rule_id = RuleId::new(entry.rule);
        let option_id = OptionId::new(entry.option);

        // Option: first occurrence keeps name/category; the rule is always appended
        let option = self
            .catalog
            .options
            .entry(option_id.clone())
            .or_insert_with(|| ProductOption::new(option_id.clone(), entry.name, entry.category));
        option.rules.push(rule_id.clone());

        // Rule: first occurrence keeps kind
        let rule = self
            .catalog
            .rules
            .entry(rule_id.clone())
            .or_insert_with(|| Rule::new(rule_id, kind));

        if entry.primary {
            rule.parent_option = Some(option_id);
        } else if !rule.child_options.contains(&option_id) {
            rule.child_options.push(option_id);
        }

        Ok(self)
    }

    /// Attach pack contents to an existing option.
    ///
    /// Unknown option ids are ignored: contents are cosmetic.
    #[must_use]
    pub fn add_pack_contents(mut self, option: &OptionId, contents: Vec<String>) -> Self {
        if let Some(opt) = self.catalog.options.get_mut(option) {
            opt.contents = Some(contents);
        }
        self
    }

    /// Whether the builder has seen the option.
    #[must_use]
    pub fn contains_option(&self, option: &OptionId) -> bool {
        self.catalog.contains_option(option)
    }

    /// Fold a sequence of entries, left to right.
    ///
    /// # Errors
    /// Returns `InvalidCatalogEntry` if:
    /// - The sequence exceeds `MAX_CATALOG_ENTRIES`
    /// - Any entry in the sequence is invalid
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfiguratorError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut builder = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if index >= MAX_CATALOG_ENTRIES {
                return Err(entry.invalid(format!(
                    "catalog exceeds {} entries",
                    MAX_CATALOG_ENTRIES
                )));
            }
            builder = builder.add_option(entry)?;
        }
        Ok(builder)
    }

    /// Attach every pack in order.
    #[must_use]
    pub fn with_packs<I>(self, packs: I) -> Self
    where
        I: IntoIterator<Item = PackContents>,
    {
        packs.into_iter().fold(self, |builder, pack| {
            builder.add_pack_contents(&OptionId::new(pack.option), pack.contents)
        })
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Catalog {
        self.catalog
    }
}

// =============================================================================
// TESTS
// =============================================================================
