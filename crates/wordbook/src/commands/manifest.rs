//! Manifest update command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use wordbook_manifest::update_manifest;

use crate::config::load_config;

/// Run the manifest command.
pub fn run(config_path: &Path, dir: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let dir = dir.unwrap_or_else(|| PathBuf::from(&file_config.results.dir));

    tracing::info!("Updating manifest in {}", dir.display());

    match update_manifest(&dir)? {
        Some(summary) => {
            tracing::info!("manifest.json updated: {} data files indexed", summary.count);
            summary.groups.log();
            tracing::info!("Reload the page to pick up the new manifest");
        }
        None => {
            tracing::warn!(
                "No JSON data files in {}; manifest left unchanged",
                dir.display()
            );
        }
    }

    Ok(())
}
