//! Vocabulary and frequency statistics over term sequences.
//!
//! - [`Vocabulary`] - distinct terms in first-seen order
//! - [`FrequencyTable`] - ordered term → value map, a JSON object on the wire
//! - [`bag_of_words`], [`term_frequency`], [`tfidf`] - the statistics
//! - [`DocumentFrequencies`] - the document set behind the IDF factor
//!
//! # Examples
//!
//! ```
//! use textlab::frequency::{DocumentFrequencies, bag_of_words, term_frequency, tfidf};
//!
//! let terms = ["cat", "sat", "cat", "mat"];
//! assert_eq!(bag_of_words(&terms).get("cat"), Some(&2));
//! assert_eq!(term_frequency(&terms).get("cat"), Some(&0.5));
//!
//! let sentences = [vec!["cat", "sat"], vec!["cat", "mat"]];
//! let df = DocumentFrequencies::from_documents(&sentences);
//! assert_eq!(tfidf(&terms, &df).get("cat"), Some(&0.0));
//! ```

pub mod corpus;
pub mod engine;
pub mod table;
pub mod vocabulary;

pub use corpus::DocumentFrequencies;
pub use engine::{bag_of_words, term_frequency, tfidf};
pub use table::FrequencyTable;
pub use vocabulary::Vocabulary;
