//! Char filter implementations for text cleaning.
//!
//! Char filters pre-process the raw text before it is passed to the
//! tokenizer. The normalizer chains them to produce the `cleaned_text` view.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`noise::NoiseCharFilter`] - Replaces non-word noise characters with spaces
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::char_filter::CharFilter;
//! use textlab::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::html_tags();
//! assert_eq!(filter.filter("<b>bold</b> text"), " bold  text");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod noise;
pub mod pattern_replace;

pub use noise::NoiseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
