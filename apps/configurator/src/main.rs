//! # Configurator
//!
//! The main binary for the product configurator rule engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │          apps/configurator (THE BINARY)       │
//! │                                               │
//! │   ┌─────────────┐       ┌─────────────────┐   │
//! │   │    CLI      │       │  Catalog files  │   │
//! │   │   (clap)    │       │  (toml / json)  │   │
//! │   └──────┬──────┘       └────────┬────────┘   │
//! │          └───────────┬───────────┘            │
//! │                      ▼                        │
//! │            ┌───────────────────┐              │
//! │            │ configurator-core │              │
//! │            │    (THE LOGIC)    │              │
//! │            └───────────────────┘              │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Status of the baseline catalog
//! configurator status
//!
//! # Toggle options and inspect the result
//! configurator select 20844
//! configurator --catalog catalog.toml --json-mode select 125089 129808
//! ```

use clap::Parser;
use configurator::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing; CONFIGURATOR_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr so stdout stays clean for reports.
    let log_format =
        std::env::var("CONFIGURATOR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "configurator=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        println!("configurator v{}", env!("CARGO_PKG_VERSION"));
        println!();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
