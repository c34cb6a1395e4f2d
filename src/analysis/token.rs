//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the preprocessing
//! pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position, offsets and an optional POS tag
//! - [`TokenType`] - Classification of token content (word, number, contraction, ...)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Positions
//!
//! Positions are assigned by the tokenizer in source order and never change
//! afterwards. Map stages (lowercasing, lemmatization, stemming) keep them;
//! the stop filter removes tokens, so the survivors keep gaps:
//!
//! ```text
//! Input:    "the cats are running"
//! Tokens:   the(0) cats(1) are(2) running(3)
//! Filtered: cats(1) running(3)
//! ```
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("don't", 1, 6, 11).with_token_type(TokenType::Contraction);
//! assert_eq!(token.text, "don't");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.token_type, TokenType::Contraction);
//! assert!(token.pos_tag.is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::tagger::PosTag;

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token sequence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the tokenized text
    pub start_offset: usize,

    /// The byte offset where this token ends in the tokenized text
    pub end_offset: usize,

    /// Content classification assigned by the tokenizer
    pub token_type: TokenType,

    /// Part-of-speech tag, attached by the tagger when tagging ran
    pub pos_tag: Option<PosTag>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters (any script), possibly mixed with digits
    Alphanum,
    /// Digits only
    Num,
    /// Word with an internal apostrophe ("don't", "o'clock")
    Contraction,
    /// Word with an internal hyphen ("well-known")
    Hyphenated,
    /// Anything else
    Other,
}

impl TokenType {
    /// Classify a token's text.
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            TokenType::Other
        } else if word.chars().all(|c| c.is_numeric()) {
            TokenType::Num
        } else if word.contains(['\'', '’']) {
            TokenType::Contraction
        } else if word.contains('-') {
            TokenType::Hyphenated
        } else if word.chars().any(|c| c.is_alphanumeric()) {
            TokenType::Alphanum
        } else {
            TokenType::Other
        }
    }

    /// Whether tokens of this type are words the morphology stages should touch.
    pub fn is_word(&self) -> bool {
        !matches!(self, TokenType::Num | TokenType::Other)
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            token_type: TokenType::detect(&text),
            text,
            position,
            start_offset: 0,
            end_offset,
            pos_tag: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        Token {
            token_type: TokenType::detect(&text),
            text,
            position,
            start_offset,
            end_offset,
            pos_tag: None,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Attach a part-of-speech tag.
    pub fn with_pos_tag(mut self, tag: PosTag) -> Self {
        self.pos_tag = Some(tag);
        self
    }

    /// Clone this token with updated text; position, offsets and tag are kept.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Collect the texts of a token slice.
pub fn texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.text.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
        assert_eq!(token.token_type, TokenType::Alphanum);
        assert!(token.pos_tag.is_none());
    }

    #[test]
    fn test_token_type_detection() {
        assert_eq!(TokenType::detect("42"), TokenType::Num);
        assert_eq!(TokenType::detect("don't"), TokenType::Contraction);
        assert_eq!(TokenType::detect("well-known"), TokenType::Hyphenated);
        assert_eq!(TokenType::detect("café"), TokenType::Alphanum);
        assert_eq!(TokenType::detect("mp3"), TokenType::Alphanum);
        assert_eq!(TokenType::detect(""), TokenType::Other);
        assert!(!TokenType::Num.is_word());
        assert!(TokenType::Hyphenated.is_word());
    }

    #[test]
    fn test_with_text_keeps_position_and_tag() {
        let token = Token::with_offsets("Running", 3, 10, 17).with_pos_tag(PosTag::VBG);
        let lowered = token.with_text("running");

        assert_eq!(lowered.text, "running");
        assert_eq!(lowered.position, 3);
        assert_eq!(lowered.start_offset, 10);
        assert_eq!(lowered.pos_tag, Some(PosTag::VBG));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
        assert_eq!(texts(&collected), vec!["hello", "world"]);
    }
}
