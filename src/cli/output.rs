//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextlabArgs};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::pipeline::ProcessResult;

/// One line of batch output.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRecord {
    /// 1-based line number in the input file.
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ProcessResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    pub requests: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub requests_per_second: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextlabArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a pipeline result in the specified format.
pub fn output_process_result(result: &ProcessResult, args: &TextlabArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", format_process_result(result));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Render a pipeline result as labelled sections, skipping absent fields.
pub fn format_process_result(result: &ProcessResult) -> String {
    let mut lines = vec![
        "Processing Result:".to_string(),
        "══════════════════".to_string(),
        format!("Original text: {}", result.original_text),
    ];

    if let Some(cleaned) = &result.cleaned_text {
        lines.push(format!("Cleaned text: {cleaned}"));
    }
    if let Some(lowercased) = &result.lowercased_text {
        lines.push(format!("Lowercased text: {lowercased}"));
    }

    let sequences = [
        ("Tokens", &result.tokens),
        ("Filtered tokens", &result.filtered_tokens),
        ("Lemmatized tokens", &result.lemmatized_tokens),
        ("Stemmed tokens", &result.stemmed_tokens),
    ];
    for (label, sequence) in sequences {
        if let Some(sequence) = sequence {
            lines.push(format!("{label} ({}): {}", sequence.len(), sequence.join(", ")));
        }
    }

    if let Some(vocabulary) = &result.vocabulary {
        lines.push(format!(
            "Vocabulary ({}): {}",
            vocabulary.len(),
            vocabulary.as_slice().join(", ")
        ));
    }
    if let Some(bag_of_words) = &result.bag_of_words {
        push_table(&mut lines, "Bag of words", bag_of_words, |count| {
            count.to_string()
        });
    }
    if let Some(term_frequency) = &result.term_frequency {
        push_table(&mut lines, "Term frequency", term_frequency, |tf| {
            format!("{tf:.4}")
        });
    }
    if let Some(tfidf) = &result.tfidf {
        push_table(&mut lines, "TF-IDF", tfidf, |score| format!("{score:.4}"));
    }
    if let Some(pos_tags) = &result.pos_tags {
        let tagged: Vec<String> = pos_tags
            .iter()
            .map(|(word, tag)| format!("{word}/{tag}"))
            .collect();
        lines.push(format!("POS tags: {}", tagged.join(" ")));
    }

    lines.join("\n")
}

fn push_table<V>(
    lines: &mut Vec<String>,
    label: &str,
    table: &FrequencyTable<V>,
    format: impl Fn(&V) -> String,
) {
    lines.push(format!("{label}:"));
    for (term, value) in table.iter() {
        lines.push(format!("  {term}: {}", format(value)));
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextlabArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextlabArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => {
            if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                format!("{f:.2}")
            } else {
                n.to_string()
            }
        }
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(_) => value.to_string(),
    }
}
