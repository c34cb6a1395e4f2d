//! Text normalizer: cleaning and lowercasing of whole documents.
//!
//! Cleaning runs a fixed chain of char filters, each switchable through
//! [`NormalizerConfig`]:
//!
//! ```text
//! HTML tags → URLs → digits (off by default) → noise → whitespace collapse → trim
//! ```
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(normalizer.clean("<p>Visit https://x.io now!</p>"), "Visit now!");
//! assert_eq!(normalizer.lowercase("Visit NOW!"), "visit now!");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, NoiseCharFilter, PatternReplaceCharFilter};

/// Which cleaning steps the normalizer applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Replace `<...>` tags with spaces.
    pub strip_html: bool,
    /// Replace URLs with spaces.
    pub strip_urls: bool,
    /// Remove digit runs entirely.
    pub strip_numbers: bool,
    /// Replace punctuation and symbols (other than `.!?` and word-internal
    /// apostrophes/hyphens) with spaces.
    pub strip_noise: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_html: true,
            strip_urls: true,
            strip_numbers: false,
            strip_noise: true,
        }
    }
}

/// Produces the cleaned and lowercased views of a document.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Normalizer {
    /// Build the char filter chain for a configuration.
    pub fn new(config: &NormalizerConfig) -> Self {
        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::new();
        if config.strip_html {
            char_filters.push(Arc::new(PatternReplaceCharFilter::html_tags()));
        }
        if config.strip_urls {
            char_filters.push(Arc::new(PatternReplaceCharFilter::urls()));
        }
        if config.strip_numbers {
            char_filters.push(Arc::new(PatternReplaceCharFilter::digits()));
        }
        if config.strip_noise {
            char_filters.push(Arc::new(NoiseCharFilter::new()));
        }
        char_filters.push(Arc::new(PatternReplaceCharFilter::collapse_whitespace()));

        Normalizer { char_filters }
    }

    /// Apply the cleaning chain and trim the result.
    pub fn clean(&self, text: &str) -> String {
        let cleaned = self
            .char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc));
        cleaned.trim().to_string()
    }

    /// Unicode-aware lowercasing.
    pub fn lowercase(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Names of the char filters in application order.
    pub fn char_filter_names(&self) -> Vec<&'static str> {
        self.char_filters.iter().map(|f| f.name()).collect()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("char_filters", &self.char_filter_names())
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}
