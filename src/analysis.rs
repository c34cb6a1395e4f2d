//! Text analysis module for textlab.
//!
//! This module provides the linguistic building blocks of the pipeline:
//! cleaning (char filters and the normalizer), tokenization, token filters
//! (lowercasing, stop words, lemmatization, stemming) and POS tagging.

pub mod char_filter;
pub mod lemmatizer;
pub mod normalizer;
pub mod tagger;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
