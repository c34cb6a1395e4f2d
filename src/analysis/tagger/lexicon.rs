//! Tagger lexicon: closed-class words, auxiliaries and irregular verb forms.
//!
//! Open-class base forms are seeded from the lemmatizer lexicon. A word that
//! is listed under several parts of speech keeps the last one inserted, so
//! verbs win over adjectives and adjectives over nouns; the contextual rules
//! repair the ambiguous cases.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

use super::PosTag;
use crate::analysis::lemmatizer::lexicon::{ADJECTIVE_EXCEPTIONS, ADJECTIVES, NOUNS, VERBS};

const CLOSED_CLASS: &[(&[&str], PosTag)] = &[
    (
        &[
            "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "another", "either", "neither",
        ],
        PosTag::DT,
    ),
    (&["all", "both", "half", "such"], PosTag::PDT),
    (&["and", "or", "but", "nor", "yet", "plus"], PosTag::CC),
    (
        &[
            "about", "above", "across", "after", "against", "along", "among", "around", "as",
            "at", "before", "behind", "below", "beneath", "beside", "between", "beyond", "by",
            "despite", "during", "except", "for", "from", "in", "inside", "into", "near", "of",
            "off", "on", "onto", "outside", "over", "per", "since", "than", "through",
            "throughout", "toward", "towards", "under", "until", "unlike", "upon", "via", "with",
            "within", "without", "whether", "because", "although", "though", "if", "while",
            "unless", "whereas",
        ],
        PosTag::IN,
    ),
    (&["to"], PosTag::TO),
    (
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves",
            "themselves",
        ],
        PosTag::PRP,
    ),
    (&["my", "your", "his", "its", "our", "their"], PosTag::PRPS),
    (&["which", "whatever", "whichever"], PosTag::WDT),
    (&["who", "whom", "what", "whoever"], PosTag::WP),
    (&["whose"], PosTag::WPS),
    (&["how", "when", "where", "why"], PosTag::WRB),
    (
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
        ],
        PosTag::MD,
    ),
    (
        &[
            "not", "never", "always", "often", "sometimes", "usually", "very", "too", "also",
            "just", "only", "even", "still", "already", "soon", "now", "then", "here", "there",
            "quite", "rather", "almost", "again", "ever", "perhaps", "maybe", "really",
            "however", "once", "twice", "away", "together", "so", "well", "n't",
        ],
        PosTag::RB,
    ),
    (&["more", "less"], PosTag::RBR),
    (&["most", "least"], PosTag::RBS),
    (&["up", "down", "out"], PosTag::RP),
    (
        &[
            "oh", "yes", "hello", "hi", "hey", "wow", "ok", "okay", "thanks", "oops", "alas",
        ],
        PosTag::UH,
    ),
    (
        &[
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
            "ten", "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred",
            "thousand", "million", "billion",
        ],
        PosTag::CD,
    ),
    (&["other", "many", "much", "several", "own", "same"], PosTag::JJ),
    (&["first", "last", "next"], PosTag::JJ),
    (&["be"], PosTag::VB),
    (&["am", "are", "have", "do"], PosTag::VBP),
    (&["is", "has", "does"], PosTag::VBZ),
    (&["was", "were", "had", "did"], PosTag::VBD),
    (&["being", "having", "doing"], PosTag::VBG),
    (&["been", "done"], PosTag::VBN),
    (
        &[
            "ate", "became", "began", "bought", "broke", "brought", "built", "came", "caught",
            "chose", "drank", "drew", "drove", "felt", "flew", "forgot", "fought", "found",
            "gave", "got", "grew", "heard", "held", "hid", "kept", "knew", "led", "lost", "made",
            "meant", "met", "paid", "ran", "rode", "rose", "said", "sang", "sat", "saw", "sent",
            "shook", "slept", "sold", "sought", "spent", "spoke", "stood", "struck", "swam",
            "taught", "thought", "threw", "took", "told", "understood", "went", "woke", "won",
            "wore", "wrote",
        ],
        PosTag::VBD,
    ),
    (
        &[
            "begun", "broken", "chosen", "drawn", "driven", "drunk", "eaten", "fallen", "flown",
            "forgotten", "given", "gone", "gotten", "grown", "hidden", "known", "lain",
            "ridden", "risen", "seen", "shaken", "spoken", "sung", "swum", "taken", "thrown",
            "woken", "worn", "written",
        ],
        PosTag::VBN,
    ),
];

/// Contractions kept whole by the tokenizer.
const CONTRACTIONS: &[(&str, PosTag)] = &[
    ("can't", PosTag::MD),
    ("won't", PosTag::MD),
    ("shan't", PosTag::MD),
    ("ain't", PosTag::VBP),
    ("i'm", PosTag::PRP),
    ("you're", PosTag::PRP),
    ("we're", PosTag::PRP),
    ("they're", PosTag::PRP),
    ("it's", PosTag::PRP),
    ("he's", PosTag::PRP),
    ("she's", PosTag::PRP),
    ("that's", PosTag::DT),
    ("there's", PosTag::EX),
    ("let's", PosTag::VB),
    ("o'clock", PosTag::RB),
];

const BE_FORMS: &[&str] = &["be", "am", "is", "are", "was", "were", "been", "being", "'s"];

const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve", "'d"];

static LEXICON: LazyLock<AHashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let mut lexicon = AHashMap::new();

    for noun in NOUNS {
        lexicon.insert(*noun, PosTag::NN);
    }
    for adjective in ADJECTIVES {
        lexicon.insert(*adjective, PosTag::JJ);
    }
    for verb in VERBS {
        lexicon.insert(*verb, PosTag::VB);
    }
    for (inflected, _) in ADJECTIVE_EXCEPTIONS {
        let tag = if inflected.ends_with("st") {
            PosTag::JJS
        } else {
            PosTag::JJR
        };
        lexicon.insert(*inflected, tag);
    }
    for (words, tag) in CLOSED_CLASS {
        for word in *words {
            lexicon.insert(*word, *tag);
        }
    }
    for (word, tag) in CONTRACTIONS {
        lexicon.insert(*word, *tag);
    }

    lexicon
});

static ADJECTIVE_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| ADJECTIVES.iter().copied().collect());

/// Lowercase a word and fold typographic apostrophes for lookup.
pub fn normalize(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

/// Look up a normalized word.
pub fn lookup(word: &str) -> Option<PosTag> {
    LEXICON.get(word).copied()
}

/// Whether a normalized word is a known adjective base form.
pub fn is_adjective(word: &str) -> bool {
    ADJECTIVE_SET.contains(word)
}

/// Whether a normalized word is a form of "be".
pub fn is_be_form(word: &str) -> bool {
    BE_FORMS.contains(&word) || (word.ends_with("'s") && lookup(word) == Some(PosTag::PRP))
}

/// Whether a normalized word is a form of "have".
pub fn is_have_form(word: &str) -> bool {
    HAVE_FORMS.contains(&word) || word.ends_with("'ve")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_priorities() {
        assert_eq!(lookup("cat"), Some(PosTag::NN));
        assert_eq!(lookup("quick"), Some(PosTag::JJ));
        // listed as noun, verb and adjective
        assert_eq!(lookup("work"), Some(PosTag::VB));
        assert_eq!(lookup("open"), Some(PosTag::VB));
        // closed class overrides open class
        assert_eq!(lookup("can"), Some(PosTag::MD));
        assert_eq!(lookup("better"), Some(PosTag::JJR));
        assert_eq!(lookup("best"), Some(PosTag::JJS));
        assert_eq!(lookup("zzz"), None);
    }

    #[test]
    fn test_auxiliary_forms() {
        assert!(is_be_form("were"));
        assert!(is_be_form("it's"));
        assert!(!is_be_form("let's"));
        assert!(is_have_form("has"));
        assert!(is_have_form("we've"));
        assert!(!is_have_form("is"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Don’t"), "don't");
        assert_eq!(lookup(&normalize("It’s")), Some(PosTag::PRP));
    }
}
