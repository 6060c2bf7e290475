//! Word set loading.

use std::fs;
use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

use crate::injector::EmbedError;

/// Load every JSON file directly in `dir`, sorted by filename.
///
/// Unlike the manifest scan this does not skip `manifest.json`: the page
/// embeds whatever the directory holds. The whole load fails on the first
/// file that is not valid JSON.
pub fn load_word_sets(dir: &Path) -> Result<Vec<Value>, EmbedError> {
    if !dir.is_dir() {
        return Err(EmbedError::MissingDir(dir.display().to_string()));
    }

    let mut paths: Vec<_> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();

    paths.sort();

    let mut sets = Vec::with_capacity(paths.len());

    for path in &paths {
        let content = fs::read_to_string(path)
            .map_err(|e| EmbedError::ReadError(format!("{}: {}", path.display(), e)))?;

        let value: Value = serde_json::from_str(&content).map_err(|e| EmbedError::JsonError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        sets.push(value);
    }

    Ok(sets)
}
