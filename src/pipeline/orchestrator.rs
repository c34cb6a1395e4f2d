//! The pipeline orchestrator.
//!
//! A request moves through a linear state machine:
//!
//! ```text
//! Received → Normalizing → Tokenizing → FilteringDeriving → Tagging → Assembled
//!     └──────────────(validation)──────────────▶ Failed
//! ```
//!
//! Validation happens in `Received`; once the pipeline leaves that state no
//! stage can fail on well-formed input. States whose work is not needed are
//! skipped.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::config::{DocumentSet, PipelineConfig};
use super::options::{ProcessOptions, Stage, StagePlan};
use super::request::ProcessRequest;
use super::result::ProcessResult;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::tagger::{PosTag, PosTagger, SENTENCE_BOUNDARY_PATTERN};
use crate::analysis::token::{IntoTokenStream, Token, texts};
use crate::analysis::token_filter::{Filter, LemmaFilter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::{Result, TextlabError};
use crate::frequency::{DocumentFrequencies, Vocabulary, bag_of_words, term_frequency, tfidf};

/// Message returned for blank input text.
pub const BLANK_TEXT_MESSAGE: &str = "Please enter some text to process.";

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SENTENCE_BOUNDARY_PATTERN).expect("sentence boundary pattern should be valid")
});

/// Where a request is in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Received,
    Normalizing,
    Tokenizing,
    FilteringDeriving,
    Tagging,
    Assembled,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Received => "received",
            PipelineState::Normalizing => "normalizing",
            PipelineState::Tokenizing => "tokenizing",
            PipelineState::FilteringDeriving => "filtering/deriving",
            PipelineState::Tagging => "tagging",
            PipelineState::Assembled => "assembled",
            PipelineState::Failed => "failed",
        };
        f.write_str(name)
    }
}

struct Transitions {
    state: PipelineState,
}

impl Transitions {
    fn new() -> Self {
        Transitions {
            state: PipelineState::Received,
        }
    }

    fn advance(&mut self, next: PipelineState) {
        debug!("pipeline: {} -> {}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, error: TextlabError) -> TextlabError {
        self.advance(PipelineState::Failed);
        debug!("pipeline failed: {error}");
        error
    }
}

/// Token sequences derived from one text.
struct Derived {
    /// Case-preserved tokens, tagged when the plan needs tags.
    tokens: Vec<Token>,
    filtered: Option<Vec<Token>>,
    lemmas: Option<Vec<Token>>,
    stems: Option<Vec<Token>>,
}

impl Derived {
    /// Lemmas if computed, else stems, else filtered tokens.
    fn terms(&self) -> Vec<String> {
        self.lemmas
            .as_deref()
            .or(self.stems.as_deref())
            .or(self.filtered.as_deref())
            .map(texts)
            .unwrap_or_default()
    }
}

/// The preprocessing pipeline. Immutable and shareable across threads.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: Normalizer,
    tokenizer: RegexTokenizer,
    tagger: PosTagger,
    lowercase: LowercaseFilter,
    stop_filter: StopFilter,
    lemma_filter: LemmaFilter,
    stem_filter: StemFilter,
}

impl Pipeline {
    /// Build a pipeline from a configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let tokenizer = RegexTokenizer::with_pattern(&config.tokenizer.pattern)?;
        let stop_filter = StopFilter::with_custom(&config.extra_stopwords);

        Ok(Pipeline {
            normalizer: Normalizer::new(&config.normalizer),
            tokenizer,
            tagger: PosTagger::new(),
            lowercase: LowercaseFilter::new(),
            stop_filter,
            lemma_filter: LemmaFilter::new(),
            stem_filter: StemFilter::new(),
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run a request envelope.
    pub fn run(&self, request: &ProcessRequest) -> Result<ProcessResult> {
        self.process(
            &request.text,
            request.options,
            request.custom_stopwords.as_deref(),
        )
    }

    /// Process `text` through the stages selected by `options`.
    ///
    /// Blank text is rejected first, then an empty stage selection; both
    /// are validation errors.
    pub fn process(
        &self,
        text: &str,
        options: ProcessOptions,
        custom_stopwords: Option<&[String]>,
    ) -> Result<ProcessResult> {
        let mut transitions = Transitions::new();

        if text.trim().is_empty() {
            return Err(transitions.fail(TextlabError::validation(BLANK_TEXT_MESSAGE)));
        }
        let plan = options.resolve().map_err(|e| transitions.fail(e))?;
        debug!(
            "processing {} bytes, stages: {:?}",
            text.len(),
            plan.stages().iter().map(Stage::name).collect::<Vec<_>>()
        );

        self.execute(text, &plan, custom_stopwords, &mut transitions)
            .map_err(|e| match e {
                TextlabError::Validation(_) | TextlabError::Processing(_) => e,
                other => TextlabError::processing(other.to_string()),
            })
    }

    fn execute(
        &self,
        text: &str,
        plan: &StagePlan,
        custom_stopwords: Option<&[String]>,
        transitions: &mut Transitions,
    ) -> Result<ProcessResult> {
        let mut result = ProcessResult::new(text);

        transitions.advance(PipelineState::Normalizing);
        let cleaned = self.normalizer.clean(text);
        if plan.emits(Stage::Lowercasing) {
            result.lowercased_text = Some(self.normalizer.lowercase(&cleaned));
        }

        if plan.needs_tokens() {
            transitions.advance(PipelineState::Tokenizing);
            let stop_filter = self.request_stop_filter(custom_stopwords);
            let derived = self.derive(&cleaned, plan, &stop_filter)?;
            debug!("{} tokens", derived.tokens.len());

            if plan.emits(Stage::Tokenization) {
                result.tokens = Some(texts(&derived.tokens));
            }

            if plan.needs_filtered() {
                transitions.advance(PipelineState::FilteringDeriving);
                self.assemble_derived(&cleaned, plan, &stop_filter, &derived, &mut result)?;
            }

            if plan.emits(Stage::PosTagging) {
                transitions.advance(PipelineState::Tagging);
                result.pos_tags = Some(
                    derived
                        .tokens
                        .iter()
                        .map(|t| (t.text.clone(), t.pos_tag.unwrap_or(PosTag::NN)))
                        .collect(),
                );
            }
        }

        result.cleaned_text = Some(cleaned);
        transitions.advance(PipelineState::Assembled);
        Ok(result)
    }

    fn assemble_derived(
        &self,
        cleaned: &str,
        plan: &StagePlan,
        stop_filter: &StopFilter,
        derived: &Derived,
        result: &mut ProcessResult,
    ) -> Result<()> {
        if plan.emits(Stage::StopwordRemoval) {
            result.filtered_tokens = derived.filtered.as_deref().map(texts);
        }
        if plan.emits(Stage::Lemmatization) {
            result.lemmatized_tokens = derived.lemmas.as_deref().map(texts);
        }
        if plan.emits(Stage::Stemming) {
            result.stemmed_tokens = derived.stems.as_deref().map(texts);
        }
        if !plan.needs_terms() {
            return Ok(());
        }

        let terms = derived.terms();
        if plan.emits(Stage::Vocabulary) {
            result.vocabulary = Some(Vocabulary::from_tokens(&terms));
        }
        if plan.emits(Stage::BagOfWords) {
            result.bag_of_words = Some(bag_of_words(&terms));
        }
        if plan.emits(Stage::TermFrequency) {
            result.term_frequency = Some(term_frequency(&terms));
        }
        if plan.emits(Stage::TfIdf) {
            let document_frequencies = self.document_frequencies(cleaned, plan, stop_filter)?;
            result.tfidf = Some(tfidf(&terms, &document_frequencies));
        }
        Ok(())
    }

    /// Tokenize `text` and derive every sequence the plan needs.
    fn derive(&self, text: &str, plan: &StagePlan, stop_filter: &StopFilter) -> Result<Derived> {
        let mut tokens = self.tokenizer.tokens(text);
        if plan.needs_tags() {
            tokens = self.tagger.tag_text(text, tokens);
        }

        let mut derived = Derived {
            tokens,
            filtered: None,
            lemmas: None,
            stems: None,
        };
        if !plan.needs_filtered() {
            return Ok(derived);
        }

        let lowered = self.lowercase.filter(derived.tokens.clone().into_token_stream())?;
        let filtered: Vec<Token> = stop_filter.filter(lowered)?.collect();

        if plan.needs_lemmas() {
            derived.lemmas = Some(
                self.lemma_filter
                    .filter(filtered.clone().into_token_stream())?
                    .collect(),
            );
        }
        if plan.needs_stems() {
            derived.stems = Some(
                self.stem_filter
                    .filter(filtered.clone().into_token_stream())?
                    .collect(),
            );
        }
        derived.filtered = Some(filtered);
        Ok(derived)
    }

    fn document_frequencies(
        &self,
        cleaned: &str,
        plan: &StagePlan,
        stop_filter: &StopFilter,
    ) -> Result<DocumentFrequencies> {
        match self.config.tfidf.document_set {
            DocumentSet::Single => Ok(DocumentFrequencies::single_document()),
            DocumentSet::Sentences => {
                let documents = SENTENCE_BOUNDARY
                    .split(cleaned)
                    .filter(|sentence| !sentence.trim().is_empty())
                    .map(|sentence| Ok(self.derive(sentence, plan, stop_filter)?.terms()))
                    .collect::<Result<Vec<_>>>()?;
                debug!("tfidf document set: {} sentences", documents.len());
                Ok(DocumentFrequencies::from_documents(&documents))
            }
        }
    }

    fn request_stop_filter(&self, custom_stopwords: Option<&[String]>) -> StopFilter {
        match custom_stopwords {
            Some(custom) if !custom.is_empty() => StopFilter::with_custom(
                self.config.extra_stopwords.iter().chain(custom.iter()),
            ),
            _ => self.stop_filter.clone(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default()).expect("Default pipeline config should be valid")
    }
}
