//! Configuration file loading (wordbook.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (wordbook.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Deserialize)]
pub struct ResultsConfig {
    /// Directory holding the JSON data files
    #[serde(default = "default_results_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct HtmlConfig {
    /// Page the embed command patches
    #[serde(default = "default_html_path")]
    pub path: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            dir: default_results_dir(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            path: default_html_path(),
        }
    }
}

fn default_results_dir() -> String {
    "results".to_string()
}

fn default_html_path() -> String {
    "japan_wordbook.html".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("wordbook.toml")).unwrap();

        assert_eq!(config.results.dir, "results");
        assert_eq!(config.html.path, "japan_wordbook.html");
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("wordbook.toml");
        fs::write(&path, "[results]\ndir = \"data\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.results.dir, "data");
        assert_eq!(config.html.path, "japan_wordbook.html");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("wordbook.toml");
        fs::write(&path, "[results\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
