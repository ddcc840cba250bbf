//! # Core Type Definitions
//!
//! This module contains all core types for the configurator rule engine:
//! - Catalog identifiers (`OptionId`, `RuleId`)
//! - Catalog entities (`ProductOption`, `Rule`, `RuleKind`)
//! - Flat catalog input (`CatalogEntry`, `PackContents`)
//! - Query output (`Status`)
//! - Error types (`ConfiguratorError`)
//!
//! ## Determinism Guarantees
//!
//! All identifier types implement `Ord` so they can key `BTreeMap`/`BTreeSet`.
//! Nothing in this module depends on hashing or iteration order of a hash map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// CATALOG IDENTIFIERS
// =============================================================================

/// Unique identifier of a selectable option, stable across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub String);

impl OptionId {
    /// Create a new option identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Unique identifier of a compatibility rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// =============================================================================
// RULE KIND
// =============================================================================

/// The closed set of rule types.
///
/// Catalog data spells them with their two-letter codes; evaluation
/// dispatches on this enum so every kind is handled exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// `OO`: at most one of the rule's options may be selected.
    #[serde(rename = "OO")]
    OneOf,
    /// `RO`: the parent unlocks once at least one child is selected.
    #[serde(rename = "RO")]
    RequireOne,
    /// `RA`: the parent unlocks only once every child is selected.
    #[serde(rename = "RA")]
    RequireAll,
    /// `NW`: no two members of the rule may be selected together.
    #[serde(rename = "NW")]
    NotWithout,
}

impl RuleKind {
    /// All rule kinds, in code order.
    pub const ALL: [Self; 4] = [
        Self::OneOf,
        Self::RequireOne,
        Self::RequireAll,
        Self::NotWithout,
    ];

    /// The two-letter catalog code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneOf => "OO",
            Self::RequireOne => "RO",
            Self::RequireAll => "RA",
            Self::NotWithout => "NW",
        }
    }

    /// Whether the rule only takes effect once one of its options is selected.
    ///
    /// `RO`/`RA` gate the parent unconditionally.
    #[must_use]
    pub const fn requires_activation(self) -> bool {
        matches!(self, Self::OneOf | Self::NotWithout)
    }
}

impl FromStr for RuleKind {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| ConfiguratorError::UnknownRuleKind(s.to_string()))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Observable state of an option. Never stored, always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The option is part of the current selection.
    Selected,
    /// A rule blocks the option under the current selection.
    Disabled,
    /// The option may be selected.
    Available,
}

impl Status {
    /// Upper-case label used by reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Selected => "SELECTED",
            Self::Disabled => "DISABLED",
            Self::Available => "AVAILABLE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// =============================================================================
// PRODUCT OPTION
// =============================================================================

/// A single selectable product feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// The option identifier.
    pub id: OptionId,
    /// Display label. Opaque to the engine.
    pub name: String,
    /// Classification tag for external filtering. Opaque to the engine.
    pub category: Option<String>,
    /// Rules this option takes part in, in catalog order.
    /// May repeat an id if the catalog lists the same membership twice.
    pub rules: Vec<RuleId>,
    /// Sub-item labels for pack options. Opaque to the engine.
    pub contents: Option<Vec<String>>,
}

impl ProductOption {
    /// Create an option with no rule memberships yet.
    #[must_use]
    pub fn new(id: OptionId, name: impl Into<String>, category: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            rules: Vec::new(),
            contents: None,
        }
    }

    /// Whether this option lists the given rule.
    #[must_use]
    pub fn belongs_to(&self, rule: &RuleId) -> bool {
        self.rules.contains(rule)
    }
}

// =============================================================================
// RULE
// =============================================================================

/// A compatibility constraint linking a set of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The rule identifier.
    pub id: RuleId,
    /// Evaluation semantics.
    pub kind: RuleKind,
    /// The primary (anchor) option, if one has been marked.
    pub parent_option: Option<OptionId>,
    /// Non-primary members, in catalog order, without duplicates.
    pub child_options: Vec<OptionId>,
}

impl Rule {
    /// Create a rule with no members.
    #[must_use]
    pub fn new(id: RuleId, kind: RuleKind) -> Self {
        Self {
            id,
            kind,
            parent_option: None,
            child_options: Vec::new(),
        }
    }

    /// Whether the given option is this rule's parent.
    #[must_use]
    pub fn is_parent(&self, option: &OptionId) -> bool {
        self.parent_option.as_ref() == Some(option)
    }

    /// Distinct members of the rule: the parent (if any) and every child.
    #[must_use]
    pub fn members(&self) -> BTreeSet<&OptionId> {
        self.parent_option
            .iter()
            .chain(self.child_options.iter())
            .collect()
    }
}

// =============================================================================
// FLAT CATALOG INPUT
// =============================================================================

/// One flat catalog tuple: `(rule, kind, option, primary, name, category?)`.
///
/// The kind is kept as its raw code, and a missing kind or name reads as
/// empty, so that malformed input surfaces as `InvalidCatalogEntry` when the
/// catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Rule the option joins.
    pub rule: String,
    /// Rule type code (`OO`, `RO`, `RA`, `NW`).
    #[serde(default)]
    pub kind: String,
    /// Option joining the rule.
    pub option: String,
    /// Whether the option is the rule's parent.
    #[serde(default)]
    pub primary: bool,
    /// Display label of the option.
    #[serde(default)]
    pub name: String,
    /// Optional classification tag.
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogEntry {
    /// Create an entry without a category.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        kind: impl Into<String>,
        option: impl Into<String>,
        primary: bool,
        name: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            kind: kind.into(),
            option: option.into(),
            primary,
            name: name.into(),
            category: None,
        }
    }

    /// Attach a category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build the `InvalidCatalogEntry` error for this entry.
    #[must_use]
    pub fn invalid(&self, reason: impl Into<String>) -> ConfiguratorError {
        ConfiguratorError::InvalidCatalogEntry {
            rule: self.rule.clone(),
            option: self.option.clone(),
            reason: reason.into(),
        }
    }
}

/// Pack contents to attach to an option after the rule tuples are folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackContents {
    /// The pack option.
    pub option: String,
    /// Sub-item labels, in display order.
    pub contents: Vec<String>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the configurator.
///
/// - No silent failures for structural problems
/// - Use `Result<T, ConfiguratorError>` for fallible operations
/// - The engine never panics; a failed operation leaves its input untouched
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    /// The option id is not part of the catalog.
    #[error("Unknown option: {0}")]
    UnknownOption(OptionId),

    /// The rule type code is not one of `OO`, `RO`, `RA`, `NW`.
    #[error("Unknown rule kind: {0:?}")]
    UnknownRuleKind(String),

    /// A catalog tuple is malformed.
    #[error("Invalid catalog entry (rule {rule:?}, option {option:?}): {reason}")]
    InvalidCatalogEntry {
        rule: String,
        option: String,
        reason: String,
    },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
