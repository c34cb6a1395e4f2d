//! Token filter implementations for token transformation.
//!
//! This module provides the filters that transform token streams produced
//! by tokenizers. Filters can modify or remove tokens to implement
//! lowercasing, stop word removal, lemmatization and stemming.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Replaces words with their dictionary form
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! The POS tagger ([`crate::analysis::tagger::PosTagger`]) is a filter too:
//! it attaches a tag to every token without changing its text.
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::token_filter::Filter;
//! use textlab::analysis::token_filter::lowercase::LowercaseFilter;
//! use textlab::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! The pipeline chains filters in a fixed order:
//!
//! ```text
//! Tokenizer → POS Tagger → Lowercase → Stop Words → Lemma / Stem
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. Map filters
/// keep token positions; removing filters keep the survivors' positions.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use textlab::analysis::token::{Token, TokenStream};
/// use textlab::analysis::token_filter::Filter;
/// use textlab::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|t| {
///                 let text: String = t.text.chars().rev().collect();
///                 t.with_text(text)
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod lowercase;
pub mod stem;
pub mod stop;

pub use lemma::LemmaFilter;
pub use lowercase::LowercaseFilter;
pub use stem::StemFilter;
pub use stop::StopFilter;
