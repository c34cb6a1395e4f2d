use ahash::{AHashMap, AHashSet};

/// Document frequencies for inverse-document-frequency weighting.
///
/// Holds the number of documents `N` and, per term, the number of documents
/// containing it. Lookups clamp the document frequency to at least 1, so
/// `idf(t) = ln(N / max(1, df(t)))` is always finite.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentFrequencies {
    num_documents: usize,
    counts: AHashMap<String, usize>,
}

impl DocumentFrequencies {
    /// The request text treated as the only document: every IDF is 0.
    pub fn single_document() -> Self {
        DocumentFrequencies {
            num_documents: 1,
            counts: AHashMap::new(),
        }
    }

    /// Count, for every term, how many of `documents` contain it.
    ///
    /// An empty document set behaves like [`single_document`](Self::single_document).
    pub fn from_documents<D, S>(documents: &[D]) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<String, usize> = AHashMap::new();
        for document in documents {
            let unique: AHashSet<&str> = document.as_ref().iter().map(|t| t.as_ref()).collect();
            for term in unique {
                *counts.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        DocumentFrequencies {
            num_documents: documents.len().max(1),
            counts,
        }
    }

    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Documents containing `term`, clamped to at least 1.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0).max(1)
    }

    pub fn idf(&self, term: &str) -> f64 {
        (self.num_documents as f64 / self.document_frequency(term) as f64).ln()
    }
}

impl Default for DocumentFrequencies {
    fn default() -> Self {
        Self::single_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_document() {
        let df = DocumentFrequencies::single_document();
        assert_eq!(df.num_documents(), 1);
        assert_eq!(df.document_frequency("anything"), 1);
        assert_eq!(df.idf("anything"), 0.0);
    }

    #[test]
    fn test_from_documents() {
        let documents = vec![
            vec!["cat", "sat", "cat"],
            vec!["dog", "sat"],
            vec!["cat"],
        ];
        let df = DocumentFrequencies::from_documents(&documents);

        assert_eq!(df.num_documents(), 3);
        assert_eq!(df.document_frequency("cat"), 2);
        assert_eq!(df.document_frequency("sat"), 2);
        assert_eq!(df.document_frequency("dog"), 1);
        assert_eq!(df.document_frequency("bird"), 1);
        assert!((df.idf("dog") - 3f64.ln()).abs() < 1e-12);
        assert!((df.idf("cat") - 1.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_set() {
        let documents: Vec<Vec<String>> = Vec::new();
        let df = DocumentFrequencies::from_documents(&documents);
        assert_eq!(df, DocumentFrequencies::single_document());
    }
}
