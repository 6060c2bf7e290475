//! Manifest model and update entry point.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scanner::scan_data_files;
use crate::summary::FileGroups;

/// File name of the generated index.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Index of the data files available to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Base names (no extension) of the data files, sorted by filename.
    pub files: Vec<String>,
}

/// Result of a successful manifest update.
#[derive(Debug)]
pub struct ManifestSummary {
    /// Number of data files indexed.
    pub count: usize,

    /// Where the manifest was written.
    pub manifest_path: PathBuf,

    /// Indexed names grouped by recognized prefix.
    pub groups: FileGroups,
}

/// Errors that can occur while updating the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Results directory not found: {0}")]
    MissingDir(String),

    #[error("Failed to write manifest: {0}")]
    WriteError(String),
}

/// Rewrite `manifest.json` in `dir` from the JSON files found there.
///
/// Returns `Ok(None)` when the directory holds no data files; nothing is
/// written in that case and any preexisting manifest is left alone. An
/// existing manifest is overwritten unconditionally otherwise.
pub fn update_manifest(dir: &Path) -> Result<Option<ManifestSummary>, ManifestError> {
    let files = scan_data_files(dir)?;

    if files.is_empty() {
        return Ok(None);
    }

    let manifest = Manifest { files };
    let manifest_path = dir.join(MANIFEST_FILE);

    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| ManifestError::WriteError(e.to_string()))?;

    fs::write(&manifest_path, json)
        .map_err(|e| ManifestError::WriteError(format!("{}: {}", manifest_path.display(), e)))?;

    tracing::debug!("Wrote {}", manifest_path.display());

    let groups = FileGroups::categorize(&manifest.files);

    Ok(Some(ManifestSummary {
        count: manifest.files.len(),
        manifest_path,
        groups,
    }))
}
