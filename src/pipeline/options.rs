//! Stage selection and dependency resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextlabError};

/// Message returned when no stage is selected.
pub const NO_STAGE_MESSAGE: &str = "Please select at least one processing option.";

/// Which stages a request asks for. Absent flags default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    pub tokenization: bool,
    pub lowercasing: bool,
    pub stopword_removal: bool,
    pub lemmatization: bool,
    pub stemming: bool,
    pub vocabulary: bool,
    pub bag_of_words: bool,
    pub tf: bool,
    pub tfidf: bool,
    pub pos_tagging: bool,
    /// Shorthand for every stage.
    pub full_preprocessing: bool,
}

impl ProcessOptions {
    /// Options for full preprocessing.
    pub fn full() -> Self {
        ProcessOptions {
            full_preprocessing: true,
            ..Default::default()
        }
    }

    /// Options with exactly the given stages selected.
    pub fn with_stages(stages: &[Stage]) -> Self {
        let mut options = ProcessOptions::default();
        for stage in stages {
            options.set(*stage, true);
        }
        options
    }

    /// Whether `stage` is selected, ignoring `full_preprocessing`.
    pub fn is_selected(&self, stage: Stage) -> bool {
        match stage {
            Stage::Tokenization => self.tokenization,
            Stage::Lowercasing => self.lowercasing,
            Stage::StopwordRemoval => self.stopword_removal,
            Stage::Lemmatization => self.lemmatization,
            Stage::Stemming => self.stemming,
            Stage::Vocabulary => self.vocabulary,
            Stage::BagOfWords => self.bag_of_words,
            Stage::TermFrequency => self.tf,
            Stage::TfIdf => self.tfidf,
            Stage::PosTagging => self.pos_tagging,
        }
    }

    pub fn set(&mut self, stage: Stage, value: bool) {
        let flag = match stage {
            Stage::Tokenization => &mut self.tokenization,
            Stage::Lowercasing => &mut self.lowercasing,
            Stage::StopwordRemoval => &mut self.stopword_removal,
            Stage::Lemmatization => &mut self.lemmatization,
            Stage::Stemming => &mut self.stemming,
            Stage::Vocabulary => &mut self.vocabulary,
            Stage::BagOfWords => &mut self.bag_of_words,
            Stage::TermFrequency => &mut self.tf,
            Stage::TfIdf => &mut self.tfidf,
            Stage::PosTagging => &mut self.pos_tagging,
        };
        *flag = value;
    }

    /// Expand `full_preprocessing` into the individual stage flags.
    pub fn expand(self) -> Self {
        if !self.full_preprocessing {
            return self;
        }
        let mut expanded = ProcessOptions::with_stages(&Stage::ALL);
        expanded.full_preprocessing = true;
        expanded
    }

    /// Normalize the options into a [`StagePlan`].
    ///
    /// Fails with a validation error when no stage is selected.
    pub fn resolve(self) -> Result<StagePlan> {
        let expanded = self.expand();
        if !Stage::ALL.iter().any(|stage| expanded.is_selected(*stage)) {
            return Err(TextlabError::validation(NO_STAGE_MESSAGE));
        }
        Ok(StagePlan { requested: expanded })
    }
}

/// A selectable pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Tokenization,
    Lowercasing,
    StopwordRemoval,
    Lemmatization,
    Stemming,
    Vocabulary,
    BagOfWords,
    TermFrequency,
    TfIdf,
    PosTagging,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::Tokenization,
        Stage::Lowercasing,
        Stage::StopwordRemoval,
        Stage::Lemmatization,
        Stage::Stemming,
        Stage::Vocabulary,
        Stage::BagOfWords,
        Stage::TermFrequency,
        Stage::TfIdf,
        Stage::PosTagging,
    ];

    /// The option name of this stage in requests.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Tokenization => "tokenization",
            Stage::Lowercasing => "lowercasing",
            Stage::StopwordRemoval => "stopword_removal",
            Stage::Lemmatization => "lemmatization",
            Stage::Stemming => "stemming",
            Stage::Vocabulary => "vocabulary",
            Stage::BagOfWords => "bag_of_words",
            Stage::TermFrequency => "tf",
            Stage::TfIdf => "tfidf",
            Stage::PosTagging => "pos_tagging",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved stage selection: which fields are emitted and which
/// intermediate sequences must be computed to produce them.
///
/// A field is emitted only when its own stage was requested. A sequence is
/// computed when it is emitted or feeds an emitted field:
///
/// ```text
/// tokens ─┬─▶ tags ─────────────────────────────▶ pos_tags
///         └─▶ lowercase ─▶ filtered ─┬─▶ lemmas ─┐
///                                    ├─▶ stems ──┼─▶ terms ─▶ vocabulary / bow / tf / tfidf
///                                    └───────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagePlan {
    requested: ProcessOptions,
}

impl StagePlan {
    /// Whether the field of `stage` appears in the result.
    pub fn emits(&self, stage: Stage) -> bool {
        self.requested.is_selected(stage)
    }

    /// Requested stages in pipeline order.
    pub fn stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|stage| self.emits(*stage))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.requested.full_preprocessing
    }

    /// Lemmatized, stemmed or filtered terms feed a statistic.
    pub fn needs_terms(&self) -> bool {
        self.emits(Stage::Vocabulary)
            || self.emits(Stage::BagOfWords)
            || self.emits(Stage::TermFrequency)
            || self.emits(Stage::TfIdf)
    }

    pub fn needs_lemmas(&self) -> bool {
        self.emits(Stage::Lemmatization)
    }

    pub fn needs_stems(&self) -> bool {
        self.emits(Stage::Stemming)
    }

    /// Lowercased, stopword-free tokens.
    pub fn needs_filtered(&self) -> bool {
        self.emits(Stage::StopwordRemoval)
            || self.needs_lemmas()
            || self.needs_stems()
            || self.needs_terms()
    }

    /// Tags drive the lemmatizer as well as the `pos_tags` field.
    pub fn needs_tags(&self) -> bool {
        self.emits(Stage::PosTagging) || self.needs_lemmas()
    }

    pub fn needs_tokens(&self) -> bool {
        self.emits(Stage::Tokenization) || self.needs_filtered() || self.needs_tags()
    }
}
