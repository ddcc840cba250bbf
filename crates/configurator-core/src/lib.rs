//! # configurator-core
//!
//! The rule evaluation engine for product configurators - THE LOGIC.
//!
//! Given a catalog of options grouped by compatibility rules, the engine
//! answers, for any option, whether it is SELECTED, DISABLED, or AVAILABLE,
//! and moves a running selection forward as options are toggled.
//!
//! ## Rule Kinds
//!
//! - `OO` one-of: once a child is selected, the rule's other options are blocked
//! - `RO` require-one: the parent unlocks when at least one child is selected
//! - `RA` require-all: the parent unlocks when every child is selected
//! - `NW` not-without: no two members may be selected together
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Holds no global state: callers pass a `State` and get a new one back
//! - Recomputes disabled-ness on every query; nothing is cached
//! - Is closed: rule kinds are a fixed enum
//! - Has NO async, NO network, NO logging dependencies (pure Rust)
//!
//! ## Example
//! ```
//! use configurator_core::{ConfiguratorError, OptionId, SelectionEngine, State, Status};
//!
//! let state = State::baseline();
//! let state = SelectionEngine::select_option(&state, &OptionId::from("20844"))?;
//! let status = SelectionEngine::get_status(&state, &OptionId::from("27128"))?;
//! assert_eq!(status, Status::Disabled);
//! # Ok::<(), ConfiguratorError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod evaluation;
pub mod primitives;
pub mod report;
pub mod selection;
pub mod session;
pub mod state;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    CatalogEntry, ConfiguratorError, OptionId, PackContents, ProductOption, Rule, RuleId,
    RuleKind, Status,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use builder::CatalogBuilder;
pub use catalog::Catalog;
pub use evaluation::rule_disables;
pub use report::{StatusLine, StatusReport};
pub use selection::SelectionEngine;
pub use session::Session;
pub use state::State;
