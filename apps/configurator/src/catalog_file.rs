//! # Catalog Files
//!
//! Loading catalogs from disk. A catalog file is the flat tuple list plus
//! optional pack contents, in TOML or JSON:
//!
//! ```toml
//! [[entries]]
//! rule = "7062192"
//! kind = "NW"
//! option = "125089"
//! primary = true
//! name = "Sport pack"
//! category = "packs"
//!
//! [[packs]]
//! option = "125089"
//! contents = ["Sport seats", "Sport suspension"]
//! ```
//!
//! Files go through the same `CatalogBuilder` validation as in-process data.

use configurator_core::{Catalog, CatalogBuilder, CatalogEntry, ConfiguratorError, PackContents};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum catalog file size (16 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
pub const MAX_CATALOG_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Flat rule tuples, folded in order.
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
    /// Pack contents, attached after all entries.
    #[serde(default)]
    pub packs: Vec<PackContents>,
}

impl CatalogFile {
    /// Parse TOML catalog text.
    pub fn from_toml(text: &str) -> Result<Self, ConfiguratorError> {
        toml::from_str(text)
            .map_err(|e| ConfiguratorError::SerializationError(format!("TOML catalog: {}", e)))
    }

    /// Parse JSON catalog bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfiguratorError> {
        serde_json::from_slice(bytes)
            .map_err(|e| ConfiguratorError::SerializationError(format!("JSON catalog: {}", e)))
    }

    /// Read a catalog file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, ConfiguratorError> {
        let validated = validate_file_path(path)?;
        validate_file_size(&validated, MAX_CATALOG_FILE_SIZE)?;

        let bytes = std::fs::read(&validated)
            .map_err(|e| ConfiguratorError::IoError(format!("Read catalog: {}", e)))?;

        let extension = validated
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let file = match extension.as_str() {
            "toml" => {
                let text = String::from_utf8(bytes).map_err(|e| {
                    ConfiguratorError::SerializationError(format!("Catalog is not UTF-8: {}", e))
                })?;
                Self::from_toml(&text)?
            }
            "json" => Self::from_json(&bytes)?,
            other => {
                return Err(ConfiguratorError::SerializationError(format!(
                    "Unknown catalog format: {:?}. Use .toml or .json",
                    other
                )));
            }
        };

        tracing::debug!(
            "Loaded catalog file {:?}: {} entries, {} packs",
            validated,
            file.entries.len(),
            file.packs.len()
        );

        Ok(file)
    }

    /// Fold the file into a catalog.
    pub fn into_catalog(self) -> Result<Catalog, ConfiguratorError> {
        Ok(CatalogBuilder::from_entries(self.entries)?
            .with_packs(self.packs)
            .build())
    }
}

/// Load a catalog from an optional path; `None` selects the baseline.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, ConfiguratorError> {
    match path {
        Some(p) => {
            tracing::info!("Loading catalog from {:?}", p);
            CatalogFile::load(p)?.into_catalog()
        }
        None => {
            tracing::info!("Using baseline catalog");
            Ok(Catalog::baseline())
        }
    }
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), ConfiguratorError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| ConfiguratorError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(ConfiguratorError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize the path and ensure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, ConfiguratorError> {
    let canonical = path.canonicalize().map_err(|e| {
        ConfiguratorError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(ConfiguratorError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

// =============================================================================
// TESTS
// =============================================================================
