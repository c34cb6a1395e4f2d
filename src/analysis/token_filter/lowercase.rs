//! Lowercase filter implementation.
//!
//! Converts token text to lowercase with full Unicode case mapping, so
//! `"ÉCOLE"` becomes `"école"`. Positions, offsets and tags are preserved.
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::token_filter::Filter;
//! use textlab::analysis::token_filter::lowercase::LowercaseFilter;
//! use textlab::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("The", 0), Token::new("QUICK", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "the");
//! assert_eq!(filtered[1].text, "quick");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.text.chars().any(|c| c.is_uppercase()) {
                    token.with_text(token.text.to_lowercase())
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::PosTag;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::with_offsets("Über", 2, 12, 17).with_pos_tag(PosTag::NNP),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "über");
        assert_eq!(result[2].position, 2);
        assert_eq!(result[2].start_offset, 12);
        assert_eq!(result[2].pos_tag, Some(PosTag::NNP));
    }

    #[test]
    fn test_lowercase_is_idempotent() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("MiXeD", 0), Token::new("42", 1)];

        let once: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        let twice: Vec<Token> = filter
            .filter(Box::new(once.clone().into_iter()))
            .unwrap()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
