//! # textlab
//!
//! A natural-language preprocessing lab for Rust.
//!
//! ## Features
//!
//! - Cleaning of HTML, URLs and noise characters
//! - Regex tokenization that keeps contractions and hyphenated words
//! - Stop word removal with per-request additions
//! - Dictionary lemmatization driven by POS tags, and Porter stemming
//! - Penn Treebank POS tagging
//! - Vocabulary, bag-of-words, TF and TF-IDF statistics
//! - An axum HTTP API and a CLI over the same [`pipeline::Pipeline`]

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod server;

pub mod prelude {
    pub use crate::error::{Result, TextlabError};
    pub use crate::pipeline::{Pipeline, PipelineConfig, ProcessOptions, ProcessResult, Stage};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
