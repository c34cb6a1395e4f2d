//! Noise removal char filter.
//!
//! Keeps alphanumerics, `_`, whitespace and the sentence delimiters `.!?`.
//! An apostrophe or hyphen survives only between two alphanumerics
//! (`don't`, `well-known`). Everything else becomes a space, so removing a
//! character never glues two words together.

use super::CharFilter;

const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];
const JOINERS: [char; 3] = ['\'', '’', '-'];

/// A char filter that replaces non-word noise with spaces.
#[derive(Clone, Debug, Default)]
pub struct NoiseCharFilter;

impl NoiseCharFilter {
    /// Create a new noise filter.
    pub fn new() -> Self {
        NoiseCharFilter
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl CharFilter for NoiseCharFilter {
    fn filter(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut output = String::with_capacity(input.len());

        for (i, &c) in chars.iter().enumerate() {
            let keep = if Self::is_word_char(c)
                || c.is_whitespace()
                || SENTENCE_DELIMITERS.contains(&c)
            {
                true
            } else if JOINERS.contains(&c) {
                let before = i > 0 && chars[i - 1].is_alphanumeric();
                let after = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
                before && after
            } else {
                false
            };

            output.push(if keep { c } else { ' ' });
        }

        output
    }

    fn name(&self) -> &'static str {
        "noise"
    }
}
