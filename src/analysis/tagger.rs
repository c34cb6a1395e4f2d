//! Part-of-speech tagging with Penn Treebank tags.
//!
//! The tagger is a small rule-based transformation tagger. Every word first
//! receives an initial tag, and a contextual pass then revises tags using
//! their neighbours:
//!
//! ```text
//! lexicon lookup ──(miss)──▶ unknown-word rules ──▶ contextual rules
//! ```
//!
//! The output always has exactly one tag per input word.
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::tagger::{PosTag, PosTagger};
//!
//! let tagger = PosTagger::new();
//! let tags = tagger.tag(&["The", "cats", "are", "running", "quickly"]);
//! assert_eq!(
//!     tags,
//!     vec![PosTag::DT, PosTag::NNS, PosTag::VBP, PosTag::VBG, PosTag::RB]
//! );
//! ```

use std::fmt;
use std::mem;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::LemmaPos;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TextlabError};

pub mod lexicon;
pub mod rules;

/// A Penn Treebank part-of-speech tag.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun
    #[serde(rename = "PRP$")]
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun
    #[serde(rename = "WP$")]
    WPS,
    /// Wh-adverb
    WRB,
}

impl PosTag {
    /// All tags, in Penn Treebank listing order.
    pub const ALL: [PosTag; 36] = [
        PosTag::CC,
        PosTag::CD,
        PosTag::DT,
        PosTag::EX,
        PosTag::FW,
        PosTag::IN,
        PosTag::JJ,
        PosTag::JJR,
        PosTag::JJS,
        PosTag::LS,
        PosTag::MD,
        PosTag::NN,
        PosTag::NNS,
        PosTag::NNP,
        PosTag::NNPS,
        PosTag::PDT,
        PosTag::POS,
        PosTag::PRP,
        PosTag::PRPS,
        PosTag::RB,
        PosTag::RBR,
        PosTag::RBS,
        PosTag::RP,
        PosTag::SYM,
        PosTag::TO,
        PosTag::UH,
        PosTag::VB,
        PosTag::VBD,
        PosTag::VBG,
        PosTag::VBN,
        PosTag::VBP,
        PosTag::VBZ,
        PosTag::WDT,
        PosTag::WP,
        PosTag::WPS,
        PosTag::WRB,
    ];

    /// The Penn Treebank spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WPS => "WP$",
            PosTag::WRB => "WRB",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_proper_noun(&self) -> bool {
        matches!(self, PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::JJ | PosTag::JJR | PosTag::JJS)
    }

    pub fn is_adverb(&self) -> bool {
        matches!(self, PosTag::RB | PosTag::RBR | PosTag::RBS)
    }

    /// The coarse part of speech the lemmatizer understands, if any.
    pub fn lemma_pos(&self) -> Option<LemmaPos> {
        if self.is_noun() {
            Some(LemmaPos::Noun)
        } else if self.is_verb() {
            Some(LemmaPos::Verb)
        } else if self.is_adjective() {
            Some(LemmaPos::Adjective)
        } else if self.is_adverb() {
            Some(LemmaPos::Adverb)
        } else {
            None
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = TextlabError;

    fn from_str(s: &str) -> Result<Self> {
        PosTag::ALL
            .iter()
            .find(|tag| tag.as_str() == s)
            .copied()
            .ok_or_else(|| TextlabError::analysis(format!("Unknown POS tag: {s}")))
    }
}

/// Runs of sentence delimiters in cleaned text.
pub const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?]+";

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SENTENCE_BOUNDARY_PATTERN).expect("sentence boundary pattern should be valid")
});

/// A word paired with its tag; serializes as `["word", "TAG"]`.
pub type TaggedToken = (String, PosTag);

/// Rule-based Penn Treebank tagger.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new tagger. The lexicon is shared and built once.
    pub fn new() -> Self {
        PosTagger
    }

    /// Tag a sequence of words; the result has one tag per word.
    pub fn tag<S: AsRef<str>>(&self, words: &[S]) -> Vec<PosTag> {
        let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        let mut tags: Vec<PosTag> = words
            .iter()
            .enumerate()
            .map(|(index, word)| Self::initial_tag(word, index))
            .collect();
        rules::apply_context(&words, &mut tags);
        tags
    }

    /// Tag tokens and pair each token text with its tag.
    pub fn tag_tokens(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        let tags = self.tag(&tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>());
        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| (token.text.clone(), tag))
            .collect()
    }

    /// Tag the tokens of `text` one sentence at a time.
    ///
    /// Token offsets must point into `text`. The first word of every sentence
    /// is tagged as sentence-initial and context rules never look across a
    /// delimiter.
    pub fn tag_text(&self, text: &str, tokens: Vec<Token>) -> Vec<Token> {
        let mut boundaries = SENTENCE_BOUNDARY
            .find_iter(text)
            .map(|m| m.start())
            .peekable();
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut sentence = Vec::new();

        for token in tokens {
            let mut crossed = false;
            while boundaries.next_if(|&end| end < token.start_offset).is_some() {
                crossed = true;
            }
            if crossed {
                tagged.extend(self.tag_sentence(mem::take(&mut sentence)));
            }
            sentence.push(token);
        }
        tagged.extend(self.tag_sentence(sentence));
        tagged
    }

    fn tag_sentence(&self, tokens: Vec<Token>) -> Vec<Token> {
        let tags = self.tag(&tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>());
        tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| token.with_pos_tag(tag))
            .collect()
    }

    fn initial_tag(word: &str, index: usize) -> PosTag {
        let lower = lexicon::normalize(word);
        lexicon::lookup(&lower).unwrap_or_else(|| rules::guess(word, &lower, index))
    }
}

impl Filter for PosTagger {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let tagged = self.tag_sentence(tokens.collect());
        Ok(Box::new(tagged.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pos_tagger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(text: &str) -> Vec<PosTag> {
        let words: Vec<&str> = text.split_whitespace().collect();
        PosTagger::new().tag(&words)
    }

    #[test]
    fn test_simple_sentences() {
        use PosTag::*;

        assert_eq!(tags_of("The cats are running quickly"), vec![DT, NNS, VBP, VBG, RB]);
        assert_eq!(tags_of("Dogs run"), vec![NNS, VBP]);
        assert_eq!(tags_of("She can swim"), vec![PRP, MD, VB]);
        assert_eq!(tags_of("I want to study"), vec![PRP, VBP, TO, VB]);
        assert_eq!(tags_of("The house was built"), vec![DT, NN, VBD, VBN]);
    }

    #[test]
    fn test_contextual_noun_after_determiner() {
        use PosTag::*;

        assert_eq!(tags_of("the study"), vec![DT, NN]);
        assert_eq!(tags_of("the open door"), vec![DT, JJ, NN]);
    }

    #[test]
    fn test_flat_adverb_after_verb() {
        use PosTag::*;

        assert_eq!(tags_of("The man works hard"), vec![DT, NN, VBZ, RB]);
        assert_eq!(tags_of("The task is hard"), vec![DT, NN, VBZ, JJ]);
        assert_eq!(tags_of("a hard task"), vec![DT, JJ, NN]);
    }

    #[test]
    fn test_existential_there() {
        use PosTag::*;

        assert_eq!(tags_of("there are cats"), vec![EX, VBP, NNS]);
        assert_eq!(tags_of("go there"), vec![VB, RB]);
    }

    #[test]
    fn test_unknown_words() {
        use PosTag::*;

        assert_eq!(tags_of("visit Paris"), vec![VB, NNP]);
        assert_eq!(tags_of("42"), vec![CD]);
        assert_eq!(tags_of("wonderful"), vec![JJ]);
        assert_eq!(tags_of("blorf"), vec![NN]);
    }

    #[test]
    fn test_output_length_matches_input() {
        let tagger = PosTagger::new();
        let empty: [&str; 0] = [];
        assert!(tagger.tag(&empty).is_empty());

        let words = ["a", "b", "c", "don't", "well-known", "2024", "Über"];
        assert_eq!(tagger.tag(&words).len(), words.len());
    }

    #[test]
    fn test_tag_strings() {
        assert_eq!(PosTag::PRPS.to_string(), "PRP$");
        assert_eq!(serde_json::to_string(&PosTag::WPS).unwrap(), "\"WP$\"");
        assert_eq!("VBZ".parse::<PosTag>().unwrap(), PosTag::VBZ);
        assert!("XX".parse::<PosTag>().is_err());

        let tagged: TaggedToken = ("cats".to_string(), PosTag::NNS);
        assert_eq!(serde_json::to_string(&tagged).unwrap(), r#"["cats","NNS"]"#);

        for tag in PosTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }

    #[test]
    fn test_lemma_pos_mapping() {
        assert_eq!(PosTag::NNS.lemma_pos(), Some(LemmaPos::Noun));
        assert_eq!(PosTag::VBG.lemma_pos(), Some(LemmaPos::Verb));
        assert_eq!(PosTag::JJR.lemma_pos(), Some(LemmaPos::Adjective));
        assert_eq!(PosTag::RB.lemma_pos(), Some(LemmaPos::Adverb));
        assert_eq!(PosTag::DT.lemma_pos(), None);
    }

    #[test]
    fn test_tag_text_restarts_each_sentence() {
        use crate::analysis::tokenizer::RegexTokenizer;

        let text = "Dogs bark. Dogs sleep! Visit Paris?";
        let tokens = RegexTokenizer::default().tokens(text);
        let tagged = PosTagger::new().tag_text(text, tokens);

        let tags: Vec<PosTag> = tagged.iter().filter_map(|t| t.pos_tag).collect();
        assert_eq!(tags.len(), 6);
        assert_eq!(tags[0], PosTag::NNS);
        assert_eq!(tags[2], PosTag::NNS);
        assert_eq!(tags[3], PosTag::VBP);
        assert_eq!(tags[4], PosTag::VB);
        assert_eq!(tags[5], PosTag::NNP);
        assert_eq!(tagged[2].position, 2);

        let within = PosTagger::new().tag(&["Dogs", "bark", "Dogs", "sleep"]);
        assert_eq!(within[2], PosTag::NNP);
    }

    #[test]
    fn test_filter_attaches_tags() {
        let tokens = vec![Token::new("Dogs", 0), Token::new("bark", 1)];
        let tagged: Vec<Token> = PosTagger::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(tagged[0].pos_tag, Some(PosTag::NNS));
        assert_eq!(tagged[1].position, 1);
        assert!(tagged[1].pos_tag.is_some());
    }
}
