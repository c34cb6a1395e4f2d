//! Unknown-word guessing and contextual transformation rules.

use super::PosTag;
use super::lexicon::{self, is_adjective, is_be_form, is_have_form};
use crate::analysis::lemmatizer::{LemmaPos, Lemmatizer};

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
];

/// Adjectives that double as adverbs without taking `-ly`.
const FLAT_ADVERBS: &[&str] = &["hard", "fast", "late", "early", "long", "straight", "high", "low"];

/// Linking verbs whose complement stays an adjective.
const LINKING_VERBS: &[&str] = &[
    "seem", "seems", "seemed", "look", "looks", "looked", "feel", "feels", "felt", "become",
    "becomes", "became", "get", "gets", "got", "remain", "remains", "remained",
];

const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ism", "er", "or"];

/// Guess the tag of a word missing from the lexicon.
///
/// `lower` is the normalized form of `word`; `index` is the word's position
/// in the sequence.
pub fn guess(word: &str, lower: &str, index: usize) -> PosTag {
    if lower.chars().any(|c| c.is_numeric())
        && lower.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '-'))
    {
        return PosTag::CD;
    }

    if index > 0 && word.chars().next().is_some_and(|c| c.is_uppercase()) {
        return PosTag::NNP;
    }

    if let Some(tag) = guess_contraction(lower) {
        return tag;
    }

    if lower.contains('-') {
        return PosTag::JJ;
    }

    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ing") {
        return PosTag::VBG;
    }
    if len > 3 && lower.ends_with("ed") {
        return PosTag::VBD;
    }
    if len > 3 && lower.ends_with("ly") {
        return PosTag::RB;
    }
    if let Some(tag) = guess_comparison(lower) {
        return tag;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::JJ;
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::NN;
    }
    if len > 3 && lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        return guess_s_form(lower);
    }

    PosTag::NN
}

/// `couldn't` takes the tag of `could`; a possessive takes its head's.
fn guess_contraction(lower: &str) -> Option<PosTag> {
    if let Some(head) = lower.strip_suffix("n't") {
        return Some(lexicon::lookup(head).unwrap_or(PosTag::VBP));
    }
    let (head, _) = lower.split_once('\'')?;
    if head.is_empty() {
        return None;
    }
    Some(match lexicon::lookup(head) {
        Some(PosTag::PRP) => PosTag::PRP,
        _ => PosTag::NN,
    })
}

/// `quicker` → JJR, `happiest` → JJS when the base is a known adjective.
fn guess_comparison(lower: &str) -> Option<PosTag> {
    let tag = if lower.ends_with("est") {
        PosTag::JJS
    } else if lower.ends_with("er") {
        PosTag::JJR
    } else {
        return None;
    };

    let base = Lemmatizer::new().lemmatize(lower, Some(LemmaPos::Adjective));
    (base != lower && is_adjective(&base)).then_some(tag)
}

/// Plural noun unless the word only reads as a verb in the lexicon.
fn guess_s_form(lower: &str) -> PosTag {
    let lemmatizer = Lemmatizer::new();
    let verb_base = lemmatizer.lemmatize(lower, Some(LemmaPos::Verb));
    let noun_base = lemmatizer.lemmatize(lower, Some(LemmaPos::Noun));

    let reads_as_verb = lexicon::lookup(&verb_base) == Some(PosTag::VB);
    let reads_as_noun = lexicon::lookup(&noun_base) == Some(PosTag::NN);
    if reads_as_verb && !reads_as_noun {
        PosTag::VBZ
    } else {
        PosTag::NNS
    }
}

/// Revise initial tags left to right using neighbouring words and tags.
///
/// Each rule reads the already revised tag on the left and the initial tag
/// on the right.
pub fn apply_context(words: &[&str], tags: &mut [PosTag]) {
    let lower: Vec<String> = words.iter().map(|w| lexicon::normalize(w)).collect();

    for i in 0..tags.len() {
        let prev = i.checked_sub(1).map(|p| tags[p]);
        let next = tags.get(i + 1).copied();
        let current = tags[i];

        let revised = match current {
            PosTag::RB if lower[i] == "there" => {
                if lower.get(i + 1).is_some_and(|w| is_be_form(w)) {
                    PosTag::EX
                } else {
                    PosTag::RB
                }
            }
            PosTag::VB | PosTag::VBP | PosTag::NN
                if matches!(prev, Some(PosTag::MD | PosTag::TO))
                    && lexicon::lookup(&lower[i]) == Some(PosTag::VB) =>
            {
                PosTag::VB
            }
            PosTag::VBP if matches!(prev, Some(PosTag::MD | PosTag::TO)) => PosTag::VB,
            PosTag::VB | PosTag::VBP if matches!(prev, Some(PosTag::DT | PosTag::PRPS)) => {
                if is_adjective(&lower[i]) && next.is_some_and(|t| t.is_noun()) {
                    PosTag::JJ
                } else {
                    PosTag::NN
                }
            }
            PosTag::VBD | PosTag::VBN
                if matches!(prev, Some(PosTag::DT | PosTag::PRPS))
                    && next.is_some_and(|t| t.is_noun() || t.is_adjective()) =>
            {
                PosTag::JJ
            }
            PosTag::VBZ if matches!(prev, Some(PosTag::DT | PosTag::PRPS | PosTag::JJ)) => {
                PosTag::NNS
            }
            PosTag::VBD if follows_auxiliary(&lower, tags, i) => PosTag::VBN,
            PosTag::VB
                if prev.is_some_and(|t| {
                    t.is_noun() || matches!(t, PosTag::PRP | PosTag::WP | PosTag::WDT)
                }) =>
            {
                PosTag::VBP
            }
            PosTag::NNS
                if matches!(prev, Some(PosTag::NN | PosTag::NNP | PosTag::PRP))
                    && matches!(
                        next,
                        Some(
                            PosTag::DT
                                | PosTag::PRPS
                                | PosTag::IN
                                | PosTag::RB
                                | PosTag::TO
                                | PosTag::PRP
                                | PosTag::CD
                        )
                    ) =>
            {
                PosTag::VBZ
            }
            PosTag::JJ
                if FLAT_ADVERBS.contains(&lower[i].as_str())
                    && prev.is_some_and(|t| t.is_verb())
                    && !is_be_form(&lower[i - 1])
                    && !LINKING_VERBS.contains(&lower[i - 1].as_str())
                    && !next.is_some_and(|t| t.is_noun() || t.is_adjective()) =>
            {
                PosTag::RB
            }
            other => other,
        };

        tags[i] = revised;
    }
}

/// Whether word `i` follows a form of "be" or "have", skipping adverbs.
fn follows_auxiliary(lower: &[String], tags: &[PosTag], i: usize) -> bool {
    (0..i)
        .rev()
        .find(|&j| !tags[j].is_adverb())
        .is_some_and(|j| is_be_form(&lower[j]) || is_have_form(&lower[j]))
}
