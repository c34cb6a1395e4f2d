use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TextlabError};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("HTML tag pattern should be valid"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("URL pattern should be valid"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern should be valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TextlabError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        })
    }

    fn preset(pattern: &LazyLock<Regex>, replacement: &str, name: &'static str) -> Self {
        Self {
            pattern: Regex::clone(pattern),
            replacement: replacement.to_string(),
            name,
        }
    }

    /// Replace HTML tags with a space so adjacent words stay apart.
    pub fn html_tags() -> Self {
        Self::preset(&HTML_TAG, " ", "html_strip")
    }

    /// Replace `http(s)://` and `www.` URLs with a space.
    pub fn urls() -> Self {
        Self::preset(&URL, " ", "url_strip")
    }

    /// Remove digit runs.
    pub fn digits() -> Self {
        Self::preset(&DIGITS, "", "digit_strip")
    }

    /// Collapse whitespace runs into a single space.
    pub fn collapse_whitespace() -> Self {
        Self::preset(&WHITESPACE, " ", "whitespace_collapse")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
        assert_eq!(filter.name(), "pattern_replace");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            PatternReplaceCharFilter::html_tags().filter("<p>one</p><p>two</p>"),
            " one  two "
        );
        assert_eq!(
            PatternReplaceCharFilter::urls().filter("see https://example.com/a?b=1 and www.rust-lang.org."),
            "see   and  "
        );
        assert_eq!(PatternReplaceCharFilter::digits().filter("room 101b"), "room b");
        assert_eq!(
            PatternReplaceCharFilter::collapse_whitespace().filter("a \t\n b"),
            "a b"
        );
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new("[", "").is_err());
    }
}
