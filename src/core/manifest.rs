use crate::domain::model::MemoryEntry;
use crate::utils::error::{OrganizeError, Result};
use std::path::Path;

/// Reads the manifest file and parses its top-level array of entries.
pub fn read_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<MemoryEntry>> {
    let path = path.as_ref();
    tracing::debug!("Reading manifest from: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| OrganizeError::ManifestReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}

pub fn parse_manifest(content: &str) -> Result<Vec<MemoryEntry>> {
    let entries: Vec<MemoryEntry> = serde_json::from_str(content)?;
    tracing::debug!("Parsed {} manifest entries", entries.len());
    Ok(entries)
}
