//! Pattern-based patching of the page script.
//!
//! The page is treated purely as text. The owned region is the marker
//! comment plus the `DEFAULT_WORD_SETS` assignment, terminated at the first
//! `];` after the opening bracket.

use regex::Regex;

use crate::injector::EmbedError;
use crate::literal::{WORD_SETS_COMMENT, WORD_SETS_CONST};

/// Replace the word-set assignment in `html` with `literal`.
///
/// Tries the marker comment plus assignment first, then falls back to the
/// bare assignment and re-synthesizes the comment. Fails when neither is
/// present; the caller gets the original text back untouched in that case.
pub fn replace_word_sets(html: &str, literal: &str) -> Result<String, EmbedError> {
    let replacement = format!(
        "{}\n        const {} = {};",
        WORD_SETS_COMMENT, WORD_SETS_CONST, literal
    );

    let full = Regex::new(&format!(
        r"{}\s+const {} = \[[\s\S]*?\];",
        regex::escape(WORD_SETS_COMMENT),
        WORD_SETS_CONST
    ))
    .expect("valid assignment pattern");

    if let Some(m) = full.find(html) {
        return Ok(splice(html, m.start(), m.end(), &replacement));
    }

    let bare = Regex::new(&format!(r"const {} = \[[\s\S]*?\];", WORD_SETS_CONST))
        .expect("valid assignment pattern");

    if let Some(m) = bare.find(html) {
        tracing::debug!("Marker comment missing; re-synthesizing it");
        return Ok(splice(html, m.start(), m.end(), &replacement));
    }

    Err(EmbedError::PatternNotFound(WORD_SETS_CONST.to_string()))
}

/// Stock three-statement init body the page ships with.
const INIT_PATTERN: &str =
    r"// 초기화\s+function init\(\) \{\s+loadFromStorage\(\);\s+renderFileList\(\);\s+\}";

/// Expanded init body: when local storage is empty, copy the embedded
/// defaults into working state, give every word without a weight the
/// default of 1 (keyed `fileName_wordId`), persist, then render.
const INIT_REPLACEMENT: &str = "// 초기화
        function init() {
            loadFromStorage();

            // LocalStorage에 데이터가 없으면 기본 데이터 추가
            if (wordSets.length === 0) {
                wordSets = [...DEFAULT_WORD_SETS];
                // 기본 데이터의 가중치 초기화
                DEFAULT_WORD_SETS.forEach(set => {
                    set.words.forEach(word => {
                        const key = `${set.fileName}_${word.id}`;
                        if (!weights[key]) {
                            weights[key] = 1;
                        }
                    });
                });
                saveToStorage();
            }

            renderFileList();
        }";

/// Rewrite the stock `init()` body.
///
/// A page whose init body has already been expanded (or edited out of
/// recognition) is returned unchanged, which is what keeps repeated embed
/// runs byte-identical.
pub fn patch_init(html: &str) -> String {
    let re = Regex::new(INIT_PATTERN).expect("valid init pattern");

    match re.find(html) {
        Some(m) => splice(html, m.start(), m.end(), INIT_REPLACEMENT),
        None => {
            tracing::debug!("Stock init() body not found; leaving it untouched");
            html.to_string()
        }
    }
}

/// Replace `html[start..end]` with `replacement`.
///
/// Spliced by span rather than through the regex replacement API so that
/// `$`-sequences in the embedded script (template literals) stay verbatim.
fn splice(html: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(html.len() - (end - start) + replacement.len());
    out.push_str(&html[..start]);
    out.push_str(replacement);
    out.push_str(&html[end..]);
    out
}
