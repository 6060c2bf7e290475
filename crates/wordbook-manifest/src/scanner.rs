//! Results directory scanning.

use std::path::Path;

use walkdir::WalkDir;

use crate::manifest::{ManifestError, MANIFEST_FILE};

/// List the base names of all JSON data files directly in `dir`.
///
/// `manifest.json` itself is excluded. Names are sorted lexicographically
/// by filename before the extension is stripped, so the order matches a
/// directory listing of the files.
pub fn scan_data_files(dir: &Path) -> Result<Vec<String>, ManifestError> {
    if !dir.is_dir() {
        return Err(ManifestError::MissingDir(dir.display().to_string()));
    }

    let mut file_names = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "json" {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == MANIFEST_FILE {
            continue;
        }

        file_names.push(name.to_string());
    }

    file_names.sort();

    let names = file_names
        .iter()
        .filter_map(|name| {
            Path::new(name)
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
        .collect();

    Ok(names)
}
