//! # Configurator CLI Module
//!
//! This module implements the CLI interface for the configurator.
//!
//! ## Available Commands
//!
//! - `status` - Show every option's status with nothing selected
//! - `select` - Toggle options in order and show the resulting status
//! - `options` - List the catalog's options
//! - `rules` - List the catalog's rules

mod commands;

use clap::{Parser, Subcommand};
use configurator_core::{ConfiguratorError, OptionId};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Configurator - product option rule engine
///
/// Evaluates which options are selected, disabled, or available
/// under a catalog of compatibility rules.
#[derive(Parser, Debug)]
#[command(name = "configurator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress header output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalog file (.toml or .json); the baseline catalog if omitted
    #[arg(short = 'c', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show option status with an empty selection
    Status,

    /// Toggle options in the given order and show the result
    Select {
        /// Option ids to toggle
        #[arg(required = true)]
        options: Vec<String>,
    },

    /// List catalog options
    Options,

    /// List catalog rules
    Rules,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), ConfiguratorError> {
    let catalog = cli.catalog.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Select { options }) => {
            let ids: Vec<OptionId> = options.into_iter().map(OptionId::new).collect();
            cmd_select(catalog, json_mode, cli.verbose, &ids)
        }
        Some(Commands::Options) => cmd_options(catalog, json_mode),
        Some(Commands::Rules) => cmd_rules(catalog, json_mode),
        Some(Commands::Status) | None => cmd_status(catalog, json_mode),
    }
}

// =============================================================================
// TESTS
// =============================================================================
