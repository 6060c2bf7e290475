//! Embed command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use wordbook_embed::{HtmlInjector, InjectConfig};

use crate::config::load_config;

/// Run the embed command.
pub fn run(config_path: &Path, html: Option<PathBuf>, results: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = InjectConfig {
        html_path: html.unwrap_or_else(|| PathBuf::from(&file_config.html.path)),
        results_dir: results.unwrap_or_else(|| PathBuf::from(&file_config.results.dir)),
    };

    tracing::info!(
        "Embedding word sets from {} into {}",
        config.results_dir.display(),
        config.html_path.display()
    );

    let report = HtmlInjector::new(config).inject()?;

    tracing::info!(
        "Embedded {} word sets into {}",
        report.word_sets,
        report.html_path.display()
    );

    Ok(())
}
