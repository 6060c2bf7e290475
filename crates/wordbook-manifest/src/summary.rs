//! Categorized breakdown of indexed file names.

/// Data file names grouped by recognized prefix.
///
/// The page data follows a loose naming convention: vocabulary pages are
/// `page_*`, grammar sets are `grammar_*`, anything else is ad hoc.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileGroups {
    /// Names starting with `page_`.
    pub page: Vec<String>,

    /// Names starting with `grammar_`.
    pub grammar: Vec<String>,

    /// Everything else.
    pub other: Vec<String>,
}

impl FileGroups {
    /// Split `names` into prefix groups, preserving order.
    pub fn categorize(names: &[String]) -> Self {
        let mut groups = Self::default();

        for name in names {
            if name.starts_with("page_") {
                groups.page.push(name.clone());
            } else if name.starts_with("grammar_") {
                groups.grammar.push(name.clone());
            } else {
                groups.other.push(name.clone());
            }
        }

        groups
    }

    /// Log the breakdown: count plus first/last entry for the prefixed
    /// groups, the full list for the rest.
    pub fn log(&self) {
        if let (Some(first), Some(last)) = (self.page.first(), self.page.last()) {
            tracing::info!("page: {} files ({} ~ {})", self.page.len(), first, last);
        }
        if let (Some(first), Some(last)) = (self.grammar.first(), self.grammar.last()) {
            tracing::info!("grammar: {} files ({} ~ {})", self.grammar.len(), first, last);
        }
        if !self.other.is_empty() {
            tracing::info!("other: {} files ({})", self.other.len(), self.other.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_by_prefix() {
        let groups = FileGroups::categorize(&names(&[
            "grammar_01",
            "misc",
            "page_01",
            "page_02",
            "단어_1",
        ]));

        assert_eq!(groups.page, names(&["page_01", "page_02"]));
        assert_eq!(groups.grammar, names(&["grammar_01"]));
        assert_eq!(groups.other, names(&["misc", "단어_1"]));
    }

    #[test]
    fn preserves_input_order_within_groups() {
        let groups = FileGroups::categorize(&names(&["page_10", "page_02", "page_01"]));

        assert_eq!(groups.page, names(&["page_10", "page_02", "page_01"]));
    }

    #[test]
    fn empty_input_yields_empty_groups() {
        let groups = FileGroups::categorize(&[]);

        assert_eq!(groups, FileGroups::default());
    }
}
