//! Pipeline configuration.
//!
//! All sections default sensibly, so a configuration file only needs the
//! keys it changes:
//!
//! ```json
//! {
//!   "normalizer": { "strip_numbers": true },
//!   "tfidf": { "document_set": "single" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::NormalizerConfig;
use crate::analysis::tokenizer::regex::DEFAULT_WORD_PATTERN;
use crate::error::{Result, TextlabError};

/// Tokenizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Regex matching one word token.
    pub pattern: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            pattern: DEFAULT_WORD_PATTERN.to_string(),
        }
    }
}

/// The documents that supply TF-IDF document frequencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSet {
    /// Every sentence of the request text is a document.
    #[default]
    Sentences,
    /// The request text is the only document; every score is 0.
    Single,
}

/// TF-IDF settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    pub document_set: DocumentSet,
}

/// Configuration of a [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub normalizer: NormalizerConfig,
    pub tokenizer: TokenizerConfig,
    pub tfidf: TfIdfConfig,
    /// Stop words added to the built-in list for every request.
    pub extra_stopwords: Vec<String>,
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextlabError::config(format!("Cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| TextlabError::config(format!("Invalid configuration: {e}")))
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
