//! Command line argument parsing for the textlab CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pipeline::{ProcessOptions, Stage};

/// textlab - a natural-language preprocessing lab
#[derive(Parser, Debug, Clone)]
#[command(name = "textlab")]
#[command(about = "Tokenize, normalize, tag and count text from the command line or over HTTP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextlabArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextlabArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the HTTP API
    Serve(ServeArgs),

    /// Process one text and print the result
    Process(ProcessArgs),

    /// Process a JSONL file of requests in parallel
    Batch(BatchArgs),
}

/// Arguments for the HTTP server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "TEXTLAB_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TEXTLAB_PORT", default_value = "8000")]
    pub port: u16,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for processing a single text
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Text to process; read from stdin when neither TEXT nor --input is given
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub stages: StageArgs,

    /// Extra stop word for this request (repeatable)
    #[arg(short = 's', long = "stopword", value_name = "WORD")]
    pub stopwords: Vec<String>,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl ProcessArgs {
    /// Custom stop words, `None` when none were given.
    pub fn custom_stopwords(&self) -> Option<&[String]> {
        (!self.stopwords.is_empty()).then_some(self.stopwords.as_slice())
    }
}

/// Stage selection flags
#[derive(Args, Debug, Clone, Default)]
pub struct StageArgs {
    /// Run every stage
    #[arg(long)]
    pub full: bool,

    #[arg(long)]
    pub tokenization: bool,

    #[arg(long)]
    pub lowercasing: bool,

    #[arg(long)]
    pub stopword_removal: bool,

    #[arg(long)]
    pub lemmatization: bool,

    #[arg(long)]
    pub stemming: bool,

    #[arg(long)]
    pub vocabulary: bool,

    #[arg(long)]
    pub bag_of_words: bool,

    /// Term frequency
    #[arg(long)]
    pub tf: bool,

    #[arg(long)]
    pub tfidf: bool,

    #[arg(long)]
    pub pos_tagging: bool,
}

impl StageArgs {
    pub fn options(&self) -> ProcessOptions {
        let flags = [
            (Stage::Tokenization, self.tokenization),
            (Stage::Lowercasing, self.lowercasing),
            (Stage::StopwordRemoval, self.stopword_removal),
            (Stage::Lemmatization, self.lemmatization),
            (Stage::Stemming, self.stemming),
            (Stage::Vocabulary, self.vocabulary),
            (Stage::BagOfWords, self.bag_of_words),
            (Stage::TermFrequency, self.tf),
            (Stage::TfIdf, self.tfidf),
            (Stage::PosTagging, self.pos_tagging),
        ];

        let mut options = ProcessOptions::default();
        for (stage, selected) in flags {
            options.set(stage, selected);
        }
        options.full_preprocessing = self.full;
        options
    }
}

/// Arguments for batch processing
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSONL file, one `{"text": ..., "options": ...}` request per line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Run every stage regardless of the options in each line
    #[arg(long)]
    pub full: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
