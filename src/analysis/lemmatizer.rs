//! Dictionary-backed lemmatizer.
//!
//! Maps an inflected word to its dictionary base form using, in order:
//!
//! 1. the irregular-form table for the part of speech (`mice` → `mouse`),
//! 2. the base-form lexicon (a known lemma maps to itself),
//! 3. suffix detachment rules whose candidate must be a known lemma,
//! 4. unvalidated fallback rules for regular noun and verb inflections.
//!
//! A fallback candidate is kept only when it is itself a fixed point, which
//! makes [`Lemmatizer::lemmatize`] idempotent. Words that no rule resolves
//! are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::lemmatizer::{LemmaPos, Lemmatizer};
//!
//! let lemmatizer = Lemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("mice", None), "mouse");
//! assert_eq!(lemmatizer.lemmatize("running", Some(LemmaPos::Verb)), "run");
//! assert_eq!(lemmatizer.lemmatize("better", Some(LemmaPos::Adjective)), "good");
//! assert_eq!(lemmatizer.lemmatize("xyzzy", None), "xyzzy");
//! ```

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

pub mod lexicon;

use lexicon::{
    ADJECTIVE_EXCEPTIONS, ADJECTIVES, ADVERB_EXCEPTIONS, NOUN_EXCEPTIONS, NOUNS,
    VERB_EXCEPTIONS, VERBS,
};

/// Coarse part of speech used to pick morphology rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LemmaPos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
    ("ier", "y"),
    ("iest", "y"),
];

struct MorphologyTables {
    known: AHashSet<&'static str>,
    nouns: AHashMap<&'static str, &'static str>,
    verbs: AHashMap<&'static str, &'static str>,
    adjectives: AHashMap<&'static str, &'static str>,
    adverbs: AHashMap<&'static str, &'static str>,
}

impl MorphologyTables {
    fn exceptions(&self, pos: LemmaPos) -> &AHashMap<&'static str, &'static str> {
        match pos {
            LemmaPos::Noun => &self.nouns,
            LemmaPos::Verb => &self.verbs,
            LemmaPos::Adjective => &self.adjectives,
            LemmaPos::Adverb => &self.adverbs,
        }
    }
}

static TABLES: LazyLock<MorphologyTables> = LazyLock::new(|| {
    let exceptions = [
        NOUN_EXCEPTIONS,
        VERB_EXCEPTIONS,
        ADJECTIVE_EXCEPTIONS,
        ADVERB_EXCEPTIONS,
    ];

    let mut known: AHashSet<&'static str> = NOUNS
        .iter()
        .chain(VERBS)
        .chain(ADJECTIVES)
        .copied()
        .collect();
    // Every exception target is a lemma in its own right.
    known.extend(exceptions.iter().flat_map(|table| table.iter().map(|(_, lemma)| *lemma)));

    MorphologyTables {
        known,
        nouns: NOUN_EXCEPTIONS.iter().copied().collect(),
        verbs: VERB_EXCEPTIONS.iter().copied().collect(),
        adjectives: ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
        adverbs: ADVERB_EXCEPTIONS.iter().copied().collect(),
    }
});

/// Rule and lexicon based lemmatizer for lowercase English words.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    /// Create a new lemmatizer. The lexicon tables are shared and built once.
    pub fn new() -> Self {
        Lemmatizer
    }

    /// Whether `word` is a known base form.
    pub fn is_known(&self, word: &str) -> bool {
        TABLES.known.contains(word)
    }

    /// Lemmatize `word`; `None` for `pos` treats it as a noun.
    pub fn lemmatize(&self, word: &str, pos: Option<LemmaPos>) -> String {
        let pos = pos.unwrap_or(LemmaPos::Noun);

        // Hyphenated compounds inflect on their last segment.
        if let Some((head, last)) = word.rsplit_once('-') {
            if !head.is_empty() && !last.is_empty() {
                return format!("{head}-{}", self.lemmatize(last, Some(pos)));
            }
        }

        if word.is_empty() || !word.chars().all(|c| c.is_alphabetic()) {
            return word.to_string();
        }

        let candidate = Self::resolve(word, pos);
        if candidate == word || Self::resolve(&candidate, pos) == candidate {
            candidate
        } else {
            word.to_string()
        }
    }

    fn resolve(word: &str, pos: LemmaPos) -> String {
        let tables = &*TABLES;

        if let Some(lemma) = tables.exceptions(pos).get(word) {
            return (*lemma).to_string();
        }
        if tables.known.contains(word) {
            return word.to_string();
        }

        let rules = match pos {
            LemmaPos::Noun => NOUN_RULES,
            LemmaPos::Verb => VERB_RULES,
            LemmaPos::Adjective => ADJECTIVE_RULES,
            LemmaPos::Adverb => &[],
        };
        for (suffix, replacement) in rules {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if tables.known.contains(candidate.as_str()) {
                return candidate;
            }
            // "running" → "runn" → "run"
            if replacement.is_empty() && pos != LemmaPos::Noun {
                if let Some(undoubled) = undouble(stem) {
                    if tables.known.contains(undoubled) {
                        return undoubled.to_string();
                    }
                }
            }
        }

        match pos {
            LemmaPos::Noun => noun_fallback(word),
            LemmaPos::Verb => verb_fallback(word),
            _ => None,
        }
        .unwrap_or_else(|| word.to_string())
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Drop the last letter of a doubled final consonant (except l, s, z).
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

fn noun_fallback(word: &str) -> Option<String> {
    let len = word.chars().count();
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
    }
    if word.ends_with("sses") {
        return Some(word[..word.len() - 2].to_string());
    }
    if len > 4 && ["xes", "ches", "shes", "zes"].iter().any(|s| word.ends_with(s)) {
        return Some(word[..word.len() - 2].to_string());
    }
    if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return Some(word[..word.len() - 1].to_string());
    }
    None
}

fn verb_fallback(word: &str) -> Option<String> {
    let len = word.chars().count();
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
            return Some(format!("{stem}y"));
        }
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() >= 3 && has_vowel(stem) {
                return Some(restore_stem(stem));
            }
            return None;
        }
    }
    if ["sses", "xes", "ches", "shes", "zes"].iter().any(|s| word.ends_with(s)) {
        return Some(word[..word.len() - 2].to_string());
    }
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return Some(word[..word.len() - 1].to_string());
    }
    None
}

/// Undo consonant doubling, or restore a silent `e` on short CVC stems.
fn restore_stem(stem: &str) -> String {
    if let Some(undoubled) = undouble(stem) {
        return undoubled.to_string();
    }
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if (3..=4).contains(&n)
        && !is_vowel(chars[n - 3])
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
    {
        return format!("{stem}e");
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_lemmas() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("cats", None), "cat");
        assert_eq!(lemmatizer.lemmatize("boxes", None), "box");
        assert_eq!(lemmatizer.lemmatize("buses", None), "bus");
        assert_eq!(lemmatizer.lemmatize("churches", None), "church");
        assert_eq!(lemmatizer.lemmatize("studies", None), "study");
        assert_eq!(lemmatizer.lemmatize("children", None), "child");
        assert_eq!(lemmatizer.lemmatize("leaves", None), "leaf");
        assert_eq!(lemmatizer.lemmatize("news", None), "news");
        assert_eq!(lemmatizer.lemmatize("glass", None), "glass");
    }

    #[test]
    fn test_unknown_noun_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("embeddings", None), "embedding");
        assert_eq!(lemmatizer.lemmatize("ponies", None), "pony");
        assert_eq!(lemmatizer.lemmatize("bosses", None), "boss");
        assert_eq!(lemmatizer.lemmatize("campus", None), "campus");
    }

    #[test]
    fn test_verb_lemmas() {
        let lemmatizer = Lemmatizer::new();
        let verb = Some(LemmaPos::Verb);
        assert_eq!(lemmatizer.lemmatize("running", verb), "run");
        assert_eq!(lemmatizer.lemmatize("ran", verb), "run");
        assert_eq!(lemmatizer.lemmatize("is", verb), "be");
        assert_eq!(lemmatizer.lemmatize("making", verb), "make");
        assert_eq!(lemmatizer.lemmatize("studied", verb), "study");
        assert_eq!(lemmatizer.lemmatize("embedded", verb), "embed");
        assert_eq!(lemmatizer.lemmatize("tokenizing", verb), "tokenize");
        assert_eq!(lemmatizer.lemmatize("coding", verb), "code");
        assert_eq!(lemmatizer.lemmatize("jumps", verb), "jump");
    }

    #[test]
    fn test_noun_default_leaves_gerunds() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("running", None), "running");
        assert_eq!(lemmatizer.lemmatize("running", Some(LemmaPos::Noun)), "running");
    }

    #[test]
    fn test_adjective_and_adverb_lemmas() {
        let lemmatizer = Lemmatizer::new();
        let adj = Some(LemmaPos::Adjective);
        assert_eq!(lemmatizer.lemmatize("better", adj), "good");
        assert_eq!(lemmatizer.lemmatize("quicker", adj), "quick");
        assert_eq!(lemmatizer.lemmatize("larger", adj), "large");
        assert_eq!(lemmatizer.lemmatize("happiest", adj), "happy");
        assert_eq!(lemmatizer.lemmatize("quickly", Some(LemmaPos::Adverb)), "quickly");
        assert_eq!(lemmatizer.lemmatize("better", Some(LemmaPos::Adverb)), "well");
    }

    #[test]
    fn test_pass_through() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("", None), "");
        assert_eq!(lemmatizer.lemmatize("42", None), "42");
        assert_eq!(lemmatizer.lemmatize("don't", Some(LemmaPos::Verb)), "don't");
        assert_eq!(lemmatizer.lemmatize("qwrtp", None), "qwrtp");
    }

    #[test]
    fn test_hyphenated_compounds() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("sister-cities", None), "sister-city");
        assert_eq!(lemmatizer.lemmatize("well-known", None), "well-known");
    }

    #[test]
    fn test_idempotence() {
        let lemmatizer = Lemmatizer::new();
        let words = [
            "cats", "running", "ran", "geese", "studies", "coding", "embedded", "better",
            "happiest", "bosses", "ponies", "sister-cities", "axes", "lives", "uses", "was",
            "processing", "quickly", "hoping", "operas", "analyses", "xyzzy",
        ];
        let positions = [
            None,
            Some(LemmaPos::Noun),
            Some(LemmaPos::Verb),
            Some(LemmaPos::Adjective),
            Some(LemmaPos::Adverb),
        ];

        for word in words {
            for pos in positions {
                let once = lemmatizer.lemmatize(word, pos);
                let twice = lemmatizer.lemmatize(&once, pos);
                assert_eq!(once, twice, "{word} with {pos:?}");
            }
        }
    }
}
