//! # Engine Primitives
//!
//! Hardcoded constants for the configurator core.
//!
//! These bound catalog input and name the baseline catalog. They are
//! compiled into the binary and are immutable at runtime.

/// Rule id of the baseline paint-colour rule.
pub const BASELINE_RULE_ID: &str = "7060187";

/// Maximum length for option and rule identifiers.
///
/// Longer identifiers are rejected by catalog validation.
pub const MAX_ID_LENGTH: usize = 64;

/// Maximum length for option display names.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum number of flat entries folded into a single catalog.
///
/// Catalog files larger than this are rejected before the fold starts.
pub const MAX_CATALOG_ENTRIES: usize = 100_000;
