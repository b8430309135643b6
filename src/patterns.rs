use regex::{Regex, RegexBuilder};

use crate::error::DetectResult;

/// Signatures of verbose error pages, checked in this order.
pub const DEFAULT_PATTERNS: [&str; 14] = [
    "Stack Trace",
    "Exception Details",
    "Error Message",
    "SQL syntax error",
    "PDOException",
    "Warning:",
    "Notice:",
    "Fatal error:",
    "Internal Server Error",
    "The server encountered an internal error or misconfiguration",
    "debug",
    "database",
    "path",
    "version",
];

/// Ordered list of case-insensitive patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub fn new<I, S>(sources: I) -> DetectResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|p| RegexBuilder::new(p.as_ref()).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Source text of the first pattern found in `content`.
    pub fn first_match(&self, content: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|re| re.is_match(content))
            .map(|re| re.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for PatternSet {
    // DEFAULT_PATTERNS are plain literals and always compile.
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS
                .iter()
                .filter_map(|p| RegexBuilder::new(p).case_insensitive(true).build().ok())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_all_patterns() {
        let set = PatternSet::default();
        assert_eq!(set.len(), DEFAULT_PATTERNS.len());
        for p in DEFAULT_PATTERNS {
            assert_eq!(set.first_match(p), Some(p), "{p}");
        }
    }

    #[test]
    fn matches_regardless_of_case() {
        let set = PatternSet::default();
        assert_eq!(set.first_match("STACK TRACE at line 5"), Some("Stack Trace"));
        assert_eq!(set.first_match("pdoexception thrown"), Some("PDOException"));
    }

    #[test]
    fn first_match_follows_list_order() {
        let set = PatternSet::default();
        // "version" appears first in the text, "Fatal error:" first in the list.
        assert_eq!(set.first_match("version 2 - Fatal error: oops"), Some("Fatal error:"));
    }

    #[test]
    fn clean_page_has_no_match() {
        let set = PatternSet::default();
        assert_eq!(set.first_match("<html><body>Hello</body></html>"), None);
        assert_eq!(set.first_match(""), None);
    }

    #[test]
    fn broad_words_are_kept() {
        let set = PatternSet::default();
        assert_eq!(set.first_match("<a href=\"/docs\">API Version</a>"), Some("version"));
        assert_eq!(set.first_match("classpath"), Some("path"));
    }

    #[test]
    fn custom_patterns_replace_defaults() {
        let set = PatternSet::new(["ORA-\\d{5}", "Traceback"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.first_match("ora-00933: SQL command not properly ended"), Some("ORA-\\d{5}"));
        assert_eq!(set.first_match("Fatal error: nope"), None);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(PatternSet::new(["(unclosed"]).is_err());
    }
}
