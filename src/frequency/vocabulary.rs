use ahash::AHashSet;
use serde::{Deserialize, Serialize, Serializer};

/// The distinct terms of a token sequence in first-seen order.
///
/// # Examples
///
/// ```
/// use textlab::frequency::Vocabulary;
///
/// let vocabulary = Vocabulary::from_tokens(&["cat", "dog", "cat", "bird"]);
/// assert_eq!(vocabulary.as_slice(), &["cat", "dog", "bird"]);
/// assert!(vocabulary.contains("dog"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Vocabulary {
    terms: Vec<String>,
    seen: AHashSet<String>,
}

impl Vocabulary {
    /// Build the vocabulary in one pass over `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut vocabulary = Vocabulary::default();
        for token in tokens {
            vocabulary.push(token.as_ref());
        }
        vocabulary
    }

    fn push(&mut self, term: &str) {
        if !self.seen.contains(term) {
            self.seen.insert(term.to_string());
            self.terms.push(term.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(terms: Vec<String>) -> Self {
        Vocabulary::from_tokens(&terms)
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.terms)
    }
}
