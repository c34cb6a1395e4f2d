//! Porter stemming algorithm implementation.
//!
//! An implementation of M. F. Porter's 1980 suffix-stripping algorithm for
//! English.
//!
//! # Algorithm
//!
//! The stemmer applies rewrite rules in five steps:
//! 1. Plurals (1a), -ed/-ing (1b) and terminal y → i (1c)
//! 2. Double suffixes: -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", -ness → "", etc.
//! 4. Remove -al, -ance, -ence, -ement, etc.
//! 5. Remove final -e (5a) and -ll → -l (5b)
//!
//! Within a step the longest matching suffix is selected; when its condition
//! fails the step makes no change.
//!
//! # Examples
//!
//! ```
//! use textlab::analysis::token_filter::stem::Stemmer;
//! use textlab::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

type Rules = &'static [(&'static str, &'static str)];

const STEP1A: Rules = &[("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")];

const STEP2: Rules = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3: Rules = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4: Rules = &[
    ("al", ""),
    ("ance", ""),
    ("ence", ""),
    ("er", ""),
    ("ic", ""),
    ("able", ""),
    ("ible", ""),
    ("ant", ""),
    ("ement", ""),
    ("ment", ""),
    ("ent", ""),
    ("ion", ""),
    ("ou", ""),
    ("ism", ""),
    ("ate", ""),
    ("iti", ""),
    ("ous", ""),
    ("ive", ""),
    ("ize", ""),
];

/// Porter stemming algorithm implementation.
///
/// Works on ASCII letters. Words of two letters or fewer, and words with
/// digits, non-ASCII letters or joiners, are returned lowercased but
/// otherwise unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    fn step1a(word: &mut Vec<u8>) {
        replace_longest(word, STEP1A, |_| true);
    }

    fn step1b(word: &mut Vec<u8>) {
        if word.ends_with(b"eed") {
            if measure(&word[..word.len() - 3]) > 0 {
                word.pop();
            }
            return;
        }

        let suffix_len = if word.ends_with(b"ed") {
            2
        } else if word.ends_with(b"ing") {
            3
        } else {
            return;
        };
        if !contains_vowel(&word[..word.len() - suffix_len]) {
            return;
        }
        word.truncate(word.len() - suffix_len);

        if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
            word.push(b'e');
        } else if ends_double_consonant(word) && !matches!(word.last(), Some(b'l' | b's' | b'z')) {
            word.pop();
        } else if measure(word) == 1 && ends_cvc(word) {
            word.push(b'e');
        }
    }

    fn step1c(word: &mut Vec<u8>) {
        let n = word.len();
        if word.ends_with(b"y") && contains_vowel(&word[..n - 1]) {
            word[n - 1] = b'i';
        }
    }

    fn step2(word: &mut Vec<u8>) {
        replace_longest(word, STEP2, |stem| measure(stem) > 0);
    }

    fn step3(word: &mut Vec<u8>) {
        replace_longest(word, STEP3, |stem| measure(stem) > 0);
    }

    fn step4(word: &mut Vec<u8>) {
        let Some((suffix, _)) = longest_match(word, STEP4) else {
            return;
        };
        let stem_len = word.len() - suffix.len();
        let stem = &word[..stem_len];
        let allowed = if *suffix == "ion" {
            matches!(stem.last(), Some(b's' | b't')) && measure(stem) > 1
        } else {
            measure(stem) > 1
        };
        if allowed {
            word.truncate(stem_len);
        }
    }

    fn step5(word: &mut Vec<u8>) {
        if word.ends_with(b"e") {
            let stem = &word[..word.len() - 1];
            let m = measure(stem);
            if m > 1 || (m == 1 && !ends_cvc(stem)) {
                word.pop();
            }
        }
        if word.ends_with(b"ll") && measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.len() <= 2 || !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return lower;
        }

        let mut bytes = lower.into_bytes();
        Self::step1a(&mut bytes);
        Self::step1b(&mut bytes);
        Self::step1c(&mut bytes);
        Self::step2(&mut bytes);
        Self::step3(&mut bytes);
        Self::step4(&mut bytes);
        Self::step5(&mut bytes);

        bytes.into_iter().map(char::from).collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Whether `word[i]` is a consonant. `y` is a consonant at the start of a
/// word or after a vowel.
fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// The `m` in `[C](VC){m}[V]`.
pub fn measure(word: &[u8]) -> usize {
    let n = word.len();
    let mut i = 0;
    while i < n && is_consonant(word, i) {
        i += 1;
    }

    let mut m = 0;
    loop {
        while i < n && !is_consonant(word, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(word, i) {
            i += 1;
        }
        m += 1;
    }
}

fn contains_vowel(word: &[u8]) -> bool {
    (0..word.len()).any(|i| !is_consonant(word, i))
}

fn ends_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// consonant-vowel-consonant, where the last consonant is not w, x or y.
fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    n >= 3
        && is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], b'w' | b'x' | b'y')
}

fn longest_match(word: &[u8], rules: Rules) -> Option<&'static (&'static str, &'static str)> {
    rules
        .iter()
        .filter(|(suffix, _)| word.ends_with(suffix.as_bytes()))
        .max_by_key(|(suffix, _)| suffix.len())
}

fn replace_longest(word: &mut Vec<u8>, rules: Rules, condition: impl Fn(&[u8]) -> bool) {
    if let Some((suffix, replacement)) = longest_match(word, rules) {
        let stem_len = word.len() - suffix.len();
        if condition(&word[..stem_len]) {
            word.truncate(stem_len);
            word.extend_from_slice(replacement.as_bytes());
        }
    }
}
