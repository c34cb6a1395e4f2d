//! Lemma filter implementation.
//!
//! Replaces each word token with its dictionary form. When the token carries
//! a POS tag the matching morphology is used; otherwise the word is treated
//! as a noun. Proper nouns and numbers pass through.
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::tagger::PosTag;
//! use textlab::analysis::token::Token;
//! use textlab::analysis::token_filter::Filter;
//! use textlab::analysis::token_filter::lemma::LemmaFilter;
//!
//! let filter = LemmaFilter::new();
//! let tokens = vec![
//!     Token::new("mice", 0),
//!     Token::new("running", 1).with_pos_tag(PosTag::VBG),
//! ];
//! let lemmas: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(lemmas[0].text, "mouse");
//! assert_eq!(lemmas[1].text, "run");
//! ```

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that lemmatizes word tokens.
#[derive(Clone, Debug, Default)]
pub struct LemmaFilter {
    lemmatizer: Lemmatizer,
}

impl LemmaFilter {
    /// Create a new lemma filter.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Lemmatize one token, honouring its tag.
    pub fn lemmatize(&self, token: &Token) -> String {
        if !token.token_type.is_word() || token.pos_tag.is_some_and(|tag| tag.is_proper_noun()) {
            return token.text.clone();
        }
        let pos = token.pos_tag.and_then(|tag| tag.lemma_pos());
        self.lemmatizer.lemmatize(&token.text, pos)
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatize(&token);
                if lemma == token.text {
                    token
                } else {
                    token.with_text(lemma)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::PosTag;
    use crate::analysis::token::texts;

    fn lemmas(tokens: Vec<Token>) -> Vec<String> {
        let result: Vec<Token> = LemmaFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        texts(&result)
    }

    #[test]
    fn test_untagged_tokens_are_nouns() {
        let tokens = vec![
            Token::new("cats", 0),
            Token::new("studies", 1),
            Token::new("running", 2),
        ];
        assert_eq!(lemmas(tokens), vec!["cat", "study", "running"]);
    }

    #[test]
    fn test_tags_select_morphology() {
        let tokens = vec![
            Token::new("was", 0).with_pos_tag(PosTag::VBD),
            Token::new("running", 1).with_pos_tag(PosTag::VBG),
            Token::new("better", 2).with_pos_tag(PosTag::JJR),
            Token::new("quickly", 3).with_pos_tag(PosTag::RB),
        ];
        assert_eq!(lemmas(tokens), vec!["be", "run", "good", "quickly"]);
    }

    #[test]
    fn test_pass_through() {
        let tokens = vec![
            Token::new("2024", 0),
            Token::new("jones", 1).with_pos_tag(PosTag::NNP),
            Token::new("the", 2).with_pos_tag(PosTag::DT),
        ];
        assert_eq!(lemmas(tokens), vec!["2024", "jones", "the"]);
    }

    #[test]
    fn test_positions_preserved() {
        let tokens = vec![Token::new("geese", 4)];
        let result: Vec<Token> = LemmaFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result[0].text, "goose");
        assert_eq!(result[0].position, 4);
    }
}
