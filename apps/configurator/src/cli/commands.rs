//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Each command loads the catalog, runs the engine, and prints a rendering
//! produced by one of the `render_*` functions.

use crate::catalog_file::load_catalog;
use configurator_core::{Catalog, ConfiguratorError, OptionId, Session, StatusReport};
use std::path::Path;

/// Pretty-print a serializable value as JSON.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ConfiguratorError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ConfiguratorError::SerializationError(format!("JSON output: {}", e)))
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show status with nothing selected.
pub fn cmd_status(catalog: Option<&Path>, json_mode: bool) -> Result<(), ConfiguratorError> {
    let session = Session::with_catalog(load_catalog(catalog)?);
    let report = session.report()?;

    println!("{}", render_report(&report, json_mode)?);
    Ok(())
}

// =============================================================================
// SELECT COMMAND
// =============================================================================

/// Toggle options in order and show the resulting status.
pub fn cmd_select(
    catalog: Option<&Path>,
    json_mode: bool,
    verbose: bool,
    options: &[OptionId],
) -> Result<(), ConfiguratorError> {
    let mut session = Session::with_catalog(load_catalog(catalog)?);

    tracing::info!("Toggling {} options", options.len());
    for option in options {
        let before = session.status(option)?;
        session.toggle(option)?;
        let after = session.status(option)?;
        tracing::debug!("{}: {} -> {}", option, before, after);

        if verbose && !json_mode {
            println!("{}: {} -> {}", option, before, after);
        }
    }

    let report = session.report()?;
    println!("{}", render_report(&report, json_mode)?);
    Ok(())
}

// =============================================================================
// LISTING COMMANDS
// =============================================================================

/// List catalog options.
pub fn cmd_options(catalog: Option<&Path>, json_mode: bool) -> Result<(), ConfiguratorError> {
    let catalog = load_catalog(catalog)?;
    println!("{}", render_options(&catalog, json_mode)?);
    Ok(())
}

/// List catalog rules.
pub fn cmd_rules(catalog: Option<&Path>, json_mode: bool) -> Result<(), ConfiguratorError> {
    let catalog = load_catalog(catalog)?;
    println!("{}", render_rules(&catalog, json_mode)?);
    Ok(())
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a status report as `"<name>: <STATUS>"` lines or JSON.
pub fn render_report(report: &StatusReport, json_mode: bool) -> Result<String, ConfiguratorError> {
    if json_mode {
        return to_json(report);
    }

    let mut out = report.to_string();
    let selected: Vec<&str> = report.selected.iter().map(|o| o.as_str()).collect();
    out.push_str(&format!("\nSelected: [{}]", selected.join(", ")));
    Ok(out)
}

/// Render the option collection.
pub fn render_options(catalog: &Catalog, json_mode: bool) -> Result<String, ConfiguratorError> {
    if json_mode {
        let options: Vec<_> = catalog.collection().collect();
        return to_json(&options);
    }

    let mut out = format!("Options ({})\n", catalog.option_count());
    for option in catalog.collection() {
        let rules: Vec<&str> = option.rules.iter().map(|r| r.as_str()).collect();
        out.push_str(&format!("  {:<10} {}", option.id, option.name));
        if let Some(category) = &option.category {
            out.push_str(&format!(" [{}]", category));
        }
        out.push_str(&format!(" rules: {}\n", rules.join(",")));
        if let Some(contents) = &option.contents {
            for item in contents {
                out.push_str(&format!("             - {}\n", item));
            }
        }
    }
    Ok(out)
}

/// Render the rule table.
pub fn render_rules(catalog: &Catalog, json_mode: bool) -> Result<String, ConfiguratorError> {
    if json_mode {
        let rules: Vec<_> = catalog.rules().collect();
        return to_json(&rules);
    }

    let mut out = format!("Rules ({})\n", catalog.rule_count());
    for rule in catalog.rules() {
        let parent = rule
            .parent_option
            .as_ref()
            .map_or("-", |p| p.as_str());
        let children: Vec<&str> = rule.child_options.iter().map(|c| c.as_str()).collect();
        out.push_str(&format!(
            "  {:<10} {} parent: {} children: {}\n",
            rule.id,
            rule.kind,
            parent,
            children.join(",")
        ));
    }
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================
