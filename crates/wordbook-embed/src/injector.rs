//! Embed orchestration: load, render, patch, overwrite.

use std::fs;
use std::path::PathBuf;

use crate::literal::render_array_literal;
use crate::loader::load_word_sets;
use crate::patcher::{patch_init, replace_word_sets};

/// Configuration for an embed run.
#[derive(Debug, Clone)]
pub struct InjectConfig {
    /// Page to patch in place.
    pub html_path: PathBuf,

    /// Directory holding the JSON word sets.
    pub results_dir: PathBuf,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from("japan_wordbook.html"),
            results_dir: PathBuf::from("results"),
        }
    }
}

/// Result of a successful embed run.
#[derive(Debug)]
pub struct InjectReport {
    /// Number of word sets embedded.
    pub word_sets: usize,

    /// Page that was rewritten.
    pub html_path: PathBuf,
}

/// Errors that can occur while embedding.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("HTML file not found: {0}")]
    MissingHtml(String),

    #[error("Results directory not found: {0}")]
    MissingDir(String),

    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to parse JSON: {path}: {message}")]
    JsonError { path: String, message: String },

    #[error("Could not find the {0} assignment in the page script")]
    PatternNotFound(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Embeds the word sets from a results directory into the page.
pub struct HtmlInjector {
    config: InjectConfig,
}

impl HtmlInjector {
    /// Create an injector for the given paths.
    pub fn new(config: InjectConfig) -> Self {
        Self { config }
    }

    /// Run the full embed.
    ///
    /// Loads and parses every word set before touching the page, so a bad
    /// data file never produces a partially updated page. The final write
    /// is a single in-place overwrite with no staging copy.
    pub fn inject(&self) -> Result<InjectReport, EmbedError> {
        let sets = load_word_sets(&self.config.results_dir)?;

        if !self.config.html_path.is_file() {
            return Err(EmbedError::MissingHtml(
                self.config.html_path.display().to_string(),
            ));
        }

        let html = fs::read_to_string(&self.config.html_path).map_err(|e| {
            EmbedError::ReadError(format!("{}: {}", self.config.html_path.display(), e))
        })?;

        let literal = render_array_literal(&sets);
        let html = replace_word_sets(&html, &literal)?;
        let html = patch_init(&html);

        fs::write(&self.config.html_path, html).map_err(|e| {
            EmbedError::WriteError(format!("{}: {}", self.config.html_path.display(), e))
        })?;

        Ok(InjectReport {
            word_sets: sets.len(),
            html_path: self.config.html_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body>
    <script>
        // 기본 단어 데이터 (results 폴더의 JSON 파일들)
        const DEFAULT_WORD_SETS = [];

        let wordSets = [];
        let weights = {};

        // 초기화
        function init() {
            loadFromStorage();
            renderFileList();
        }
    </script>
</body>
</html>
"#;

    /// Parse the embedded literal back out of the patched page.
    fn extract_literal(html: &str) -> Vec<Value> {
        let start = html.find("const DEFAULT_WORD_SETS = ").unwrap()
            + "const DEFAULT_WORD_SETS = ".len();
        let end = html[start..].find("];").unwrap() + start + 1;
        serde_json::from_str(&html[start..end]).unwrap()
    }

    fn write_fixture(dir: &std::path::Path) -> (PathBuf, PathBuf) {
        let html_path = dir.join("japan_wordbook.html");
        let results_dir = dir.join("results");

        fs::write(&html_path, PAGE).unwrap();
        fs::create_dir(&results_dir).unwrap();
        fs::write(
            results_dir.join("page_1.json"),
            r#"{"fileName": "page_1", "words": [{"id": 1, "japanese": "水", "meaning": "물"}]}"#,
        )
        .unwrap();
        fs::write(
            results_dir.join("grammar_1.json"),
            r#"{"fileName": "grammar_1", "words": []}"#,
        )
        .unwrap();

        (html_path, results_dir)
    }

    #[test]
    fn embeds_word_sets_in_filename_order() {
        let temp = tempdir().unwrap();
        let (html_path, results_dir) = write_fixture(temp.path());

        let report = HtmlInjector::new(InjectConfig {
            html_path: html_path.clone(),
            results_dir: results_dir.clone(),
        })
        .inject()
        .unwrap();

        assert_eq!(report.word_sets, 2);

        let html = fs::read_to_string(&html_path).unwrap();
        let embedded = extract_literal(&html);
        let direct = crate::loader::load_word_sets(&results_dir).unwrap();

        assert_eq!(embedded, direct);
        assert_eq!(embedded[0]["fileName"], json!("grammar_1"));
        assert_eq!(embedded[1]["fileName"], json!("page_1"));
    }

    #[test]
    fn patches_init_to_seed_from_defaults() {
        let temp = tempdir().unwrap();
        let (html_path, results_dir) = write_fixture(temp.path());

        HtmlInjector::new(InjectConfig {
            html_path: html_path.clone(),
            results_dir,
        })
        .inject()
        .unwrap();

        let html = fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("wordSets = [...DEFAULT_WORD_SETS];"));
        assert!(html.contains("weights[key] = 1;"));
    }

    #[test]
    fn non_ascii_content_survives_embedding() {
        let temp = tempdir().unwrap();
        let (html_path, results_dir) = write_fixture(temp.path());

        HtmlInjector::new(InjectConfig {
            html_path: html_path.clone(),
            results_dir,
        })
        .inject()
        .unwrap();

        let html = fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("水"));
        assert!(html.contains("물"));
    }

    #[test]
    fn second_run_is_byte_identical() {
        let temp = tempdir().unwrap();
        let (html_path, results_dir) = write_fixture(temp.path());

        let config = InjectConfig {
            html_path: html_path.clone(),
            results_dir,
        };

        HtmlInjector::new(config.clone()).inject().unwrap();
        let first = fs::read_to_string(&html_path).unwrap();

        HtmlInjector::new(config).inject().unwrap();
        let second = fs::read_to_string(&html_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn page_without_markers_is_not_modified() {
        let temp = tempdir().unwrap();
        let (html_path, results_dir) = write_fixture(temp.path());
        let original = "<html><body>nothing to patch</body></html>";
        fs::write(&html_path, original).unwrap();

        let result = HtmlInjector::new(InjectConfig {
            html_path: html_path.clone(),
            results_dir,
        })
        .inject();

        assert!(matches!(result, Err(EmbedError::PatternNotFound(_))));
        assert_eq!(fs::read_to_string(&html_path).unwrap(), original);
    }

    #[test]
    fn missing_html_file_errors_before_writing() {
        let temp = tempdir().unwrap();
        let (html_path, results_dir) = write_fixture(temp.path());
        fs::remove_file(&html_path).unwrap();

        let result = HtmlInjector::new(InjectConfig {
            html_path,
            results_dir,
        })
        .inject();

        assert!(matches!(result, Err(EmbedError::MissingHtml(_))));
    }

    #[test]
    fn missing_results_dir_errors_before_reading_page() {
        let temp = tempdir().unwrap();
        let html_path = temp.path().join("japan_wordbook.html");
        fs::write(&html_path, PAGE).unwrap();

        let result = HtmlInjector::new(InjectConfig {
            html_path: html_path.clone(),
            results_dir: temp.path().join("results"),
        })
        .inject();

        assert!(matches!(result, Err(EmbedError::MissingDir(_))));
        assert_eq!(fs::read_to_string(&html_path).unwrap(), PAGE);
    }
}
