//! The preprocessing pipeline.
//!
//! A [`Pipeline`] turns one text and a stage selection into a
//! [`ProcessResult`]. Options are resolved into a [`StagePlan`] first, so
//! requesting a statistic computes the token sequences it depends on without
//! emitting them.
//!
//! # Examples
//!
//! ```
//! use textlab::pipeline::{Pipeline, ProcessOptions, Stage};
//!
//! let pipeline = Pipeline::default();
//! let options = ProcessOptions::with_stages(&[Stage::StopwordRemoval, Stage::BagOfWords]);
//! let result = pipeline.process("The cat sat on the cat.", options, None).unwrap();
//!
//! assert_eq!(
//!     result.filtered_tokens,
//!     Some(vec!["cat".to_string(), "sat".to_string(), "cat".to_string()])
//! );
//! assert_eq!(result.bag_of_words.unwrap().get("cat"), Some(&2));
//! assert!(result.tokens.is_none());
//! ```

pub mod config;
pub mod options;
pub mod orchestrator;
pub mod request;
pub mod result;

pub use config::{DocumentSet, PipelineConfig, TfIdfConfig, TokenizerConfig};
pub use options::{ProcessOptions, Stage, StagePlan};
pub use orchestrator::{Pipeline, PipelineState};
pub use request::{FullRequest, ProcessRequest};
pub use result::ProcessResult;
