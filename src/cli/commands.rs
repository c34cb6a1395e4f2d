//! Command implementations for the textlab CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TextlabError};
use crate::pipeline::{Pipeline, PipelineConfig, ProcessOptions, ProcessRequest};
use crate::server;

/// Execute a CLI command.
pub fn execute_command(args: TextlabArgs) -> Result<()> {
    match &args.command {
        Command::Serve(serve_args) => serve(serve_args, &args),
        Command::Process(process_args) => process_text(process_args, &args),
        Command::Batch(batch_args) => process_batch(batch_args, &args),
    }
}

/// Build a pipeline from an optional configuration file.
pub fn load_pipeline(config: Option<&Path>) -> Result<Pipeline> {
    if let Some(path) = config {
        debug!("Loading configuration from {}", path.display());
    }
    Pipeline::new(PipelineConfig::load(config)?)
}

/// Run the HTTP server on a multi-threaded tokio runtime.
fn serve(args: &ServeArgs, _cli_args: &TextlabArgs) -> Result<()> {
    let pipeline = load_pipeline(args.config.as_deref())?;
    let ip: IpAddr = args
        .host
        .parse()
        .map_err(|e| TextlabError::config(format!("Invalid host '{}': {e}", args.host)))?;
    let addr = SocketAddr::new(ip, args.port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(addr, pipeline))
}

/// Process one text and print the result.
fn process_text(args: &ProcessArgs, cli_args: &TextlabArgs) -> Result<()> {
    let pipeline = load_pipeline(args.config.as_deref())?;
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read input file {}", path.display()))?,
        (None, None) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let result = pipeline.process(&text, args.stages.options(), args.custom_stopwords())?;
    output_process_result(&result, cli_args)
}

/// Process a JSONL file of requests across a rayon pool.
fn process_batch(args: &BatchArgs, cli_args: &TextlabArgs) -> Result<()> {
    let pipeline = load_pipeline(args.config.as_deref())?;

    let file = File::open(&args.input)
        .with_context(|| format!("Cannot open batch file {}", args.input.display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((index + 1, line));
        }
    }
    info!(
        "Processing {} requests from {}",
        lines.len(),
        args.input.display()
    );

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = args.threads {
            builder = builder.num_threads(threads);
        }
        builder
            .build()
            .map_err(|e| TextlabError::processing(format!("Cannot start worker pool: {e}")))?
    };

    let start_time = Instant::now();
    let records: Vec<BatchRecord> = pool.install(|| {
        lines
            .par_iter()
            .map(|(line, content)| run_line(&pipeline, *line, content, args.full))
            .collect()
    });
    let duration = start_time.elapsed();

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    for record in &records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    let failed = records.iter().filter(|r| r.error.is_some()).count();
    let summary = BatchSummary {
        requests: records.len(),
        succeeded: records.len() - failed,
        failed,
        duration_ms: duration.as_millis() as u64,
        requests_per_second: records.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };
    info!(
        "Batch finished: {} succeeded, {} failed in {}ms",
        summary.succeeded, summary.failed, summary.duration_ms
    );

    if args.output.is_some() {
        output_result("Batch processing complete", &summary, cli_args)?;
    }
    Ok(())
}

/// Parse and run one request line.
pub fn run_line(pipeline: &Pipeline, line: usize, content: &str, full: bool) -> BatchRecord {
    let outcome = serde_json::from_str::<ProcessRequest>(content)
        .map_err(|e| TextlabError::validation(format!("Invalid request: {e}")))
        .and_then(|mut request| {
            if full {
                request.options = ProcessOptions::full();
            }
            pipeline.run(&request)
        });

    match outcome {
        Ok(result) => BatchRecord {
            line,
            result: Some(result),
            error: None,
        },
        Err(e) => {
            debug!("line {line} failed: {e}");
            BatchRecord {
                line,
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn test_run_line() {
        let pipeline = Pipeline::default();

        let record = run_line(
            &pipeline,
            1,
            r#"{"text": "Cats purr.", "options": {"tokenization": true}}"#,
            false,
        );
        assert_eq!(record.line, 1);
        let result = record.result.unwrap();
        assert_eq!(result.tokens, Some(vec!["Cats".to_string(), "purr".to_string()]));

        let record = run_line(&pipeline, 2, r#"{"text": "Cats purr."}"#, false);
        assert_eq!(
            record.error.as_deref(),
            Some("Please select at least one processing option.")
        );

        let record = run_line(&pipeline, 3, r#"{"text": "Cats purr."}"#, true);
        assert_eq!(record.result.unwrap().populated_fields().len(), 11);

        let record = run_line(&pipeline, 4, "not json", false);
        assert!(record.error.unwrap().starts_with("Invalid request"));
    }

    #[test]
    fn test_batch_to_file() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, r#"{{"text": "Dogs run.", "options": {{"stemming": true}}}}"#).unwrap();
        writeln!(input).unwrap();
        writeln!(input, r#"{{"text": ""}}"#).unwrap();

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.jsonl");
        let args = TextlabArgs::try_parse_from([
            "textlab",
            "-q",
            "--format",
            "json",
            "batch",
            input.path().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--threads",
            "2",
        ])
        .unwrap();
        execute_command(args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let records: Vec<BatchRecord> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(
            records[0].result.as_ref().unwrap().stemmed_tokens,
            Some(vec!["dog".to_string(), "run".to_string()])
        );
        assert_eq!(records[1].line, 3);
        assert_eq!(
            records[1].error.as_deref(),
            Some("Please enter some text to process.")
        );
    }

    #[test]
    fn test_missing_batch_file() {
        let args =
            TextlabArgs::try_parse_from(["textlab", "batch", "/nonexistent/requests.jsonl"])
                .unwrap();
        let error = execute_command(args).unwrap_err();
        assert!(matches!(error, TextlabError::Anyhow(_)));
        assert!(error.to_string().contains("Cannot open batch file"));
    }

    #[test]
    fn test_load_pipeline_with_config() {
        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, r#"{{"extra_stopwords": ["purr"]}}"#).unwrap();

        let pipeline = load_pipeline(Some(config.path())).unwrap();
        let result = pipeline
            .process(
                "Cats purr.",
                ProcessOptions::with_stages(&[crate::pipeline::Stage::StopwordRemoval]),
                None,
            )
            .unwrap();
        assert_eq!(result.filtered_tokens, Some(vec!["cats".to_string()]));
    }
}
