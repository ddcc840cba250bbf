//! # configurator
//!
//! Library half of the configurator binary: catalog file loading and the
//! clap CLI. Exposed as a library so integration tests can drive it.

pub mod catalog_file;
pub mod cli;
