//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CivilityArgs, OutputFormat};
use crate::error::Result;
use crate::training::LabelMetrics;

/// Result structure for training runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_dir: String,
    pub mode: String,
    pub training_examples: usize,
    pub test_examples: usize,
    pub per_label: Vec<LabelMetrics>,
}

/// Result structure for one classified comment.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub comment: String,
    pub labels: Vec<String>,
}

/// Result structure for batch classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    pub results: Vec<ClassificationResult>,
    pub total: usize,
}

/// Print a serializable result in the selected output format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CivilityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result),
    }
}

fn output_human<T: Serialize>(message: &str, result: &T, args: &CivilityArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    match &value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::Array(labels)) = map.get("labels") {
                // Single classification: print the label tokens directly.
                let tokens: Vec<String> = labels
                    .iter()
                    .filter_map(|l| l.as_str().map(|s| s.to_string()))
                    .collect();
                println!("{}", tokens.join(", "));
            } else if let Some(serde_json::Value::Array(results)) = map.get("results") {
                for item in results {
                    let comment = item["comment"].as_str().unwrap_or("");
                    let labels: Vec<&str> = item["labels"]
                        .as_array()
                        .map(|a| a.iter().filter_map(|l| l.as_str()).collect())
                        .unwrap_or_default();
                    println!("{}\t{}", labels.join(", "), comment);
                }
            } else if let Some(serde_json::Value::Array(per_label)) = map.get("per_label") {
                println!(
                    "{} training examples, {} held out",
                    map["training_examples"], map["test_examples"]
                );
                if per_label.is_empty() {
                    println!("held-out partition empty, evaluation skipped");
                } else {
                    println!(
                        "{:<12} {:>9} {:>9} {:>9} {:>9}",
                        "label", "precision", "recall", "f1", "support"
                    );
                    for m in per_label {
                        println!(
                            "{:<12} {:>9.3} {:>9.3} {:>9.3} {:>9}",
                            m["label"].as_str().unwrap_or(""),
                            m["precision"].as_f64().unwrap_or(0.0),
                            m["recall"].as_f64().unwrap_or(0.0),
                            m["f1"].as_f64().unwrap_or(0.0),
                            m["support"].as_u64().unwrap_or(0)
                        );
                    }
                }
                println!("model written to {}", map["model_dir"].as_str().unwrap_or(""));
            } else {
                print_fields(map);
            }
        }
        _ => println!("{value}"),
    }
    Ok(())
}

fn print_fields(map: &serde_json::Map<String, serde_json::Value>) {
    for (key, value) in map {
        match value {
            serde_json::Value::Array(items) => {
                println!("{key}:");
                for item in items {
                    println!("  {item}");
                }
            }
            _ => println!("{key}: {value}"),
        }
    }
}

fn output_json<T: Serialize>(result: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
