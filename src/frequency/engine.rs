use log::trace;

use super::corpus::DocumentFrequencies;
use super::table::FrequencyTable;

/// Raw counts per distinct token, keys in first-seen order.
///
/// The counts sum to `tokens.len()`.
pub fn bag_of_words<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable<usize> {
    let mut counts = FrequencyTable::new();
    for token in tokens {
        *counts.entry_or(token.as_ref(), 0) += 1;
    }
    counts
}

/// Relative frequency `count / len` per distinct token.
///
/// Empty input gives an empty table; otherwise the values sum to 1.
pub fn term_frequency<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable<f64> {
    let total = tokens.len() as f64;
    bag_of_words(tokens).map_values(|_, &count| count as f64 / total)
}

/// `tf(t) × ln(N / max(1, df(t)))` per distinct token.
pub fn tfidf<S: AsRef<str>>(
    tokens: &[S],
    document_frequencies: &DocumentFrequencies,
) -> FrequencyTable<f64> {
    trace!(
        "tfidf over {} tokens, {} documents",
        tokens.len(),
        document_frequencies.num_documents()
    );
    term_frequency(tokens).map_values(|term, &tf| tf * document_frequencies.idf(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_of_words() {
        let tokens = vec!["cat", "dog", "cat", "bird", "cat"];
        let bow = bag_of_words(&tokens);

        assert_eq!(bow.keys().collect::<Vec<_>>(), vec!["cat", "dog", "bird"]);
        assert_eq!(bow.get("cat"), Some(&3));
        assert_eq!(bow.values().sum::<usize>(), tokens.len());
    }

    #[test]
    fn test_term_frequency() {
        let tokens = vec!["a", "b", "a", "c"];
        let tf = term_frequency(&tokens);

        assert_eq!(tf.get("a"), Some(&0.5));
        assert_eq!(tf.get("b"), Some(&0.25));
        assert!((tf.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<String> = Vec::new();
        assert!(bag_of_words(&empty).is_empty());
        assert!(term_frequency(&empty).is_empty());
        assert!(tfidf(&empty, &DocumentFrequencies::single_document()).is_empty());
    }

    #[test]
    fn test_tfidf_single_document_is_zero() {
        let tokens = vec!["cat", "sat", "cat"];
        let scores = tfidf(&tokens, &DocumentFrequencies::single_document());

        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn test_tfidf_with_documents() {
        let tokens = vec!["cat", "sat", "dog"];
        let documents = vec![vec!["cat", "sat"], vec!["dog", "sat"]];
        let df = DocumentFrequencies::from_documents(&documents);
        let scores = tfidf(&tokens, &df);

        let third = 1.0 / 3.0;
        assert_eq!(scores.get("sat"), Some(&0.0));
        assert!((scores.get("cat").copied().unwrap() - third * 2f64.ln()).abs() < 1e-12);
        assert!((scores.get("dog").copied().unwrap() - third * 2f64.ln()).abs() < 1e-12);
        assert!(scores.values().all(|&s| s >= 0.0));
    }
}
