//! Command line argument parsing for the civility CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// civility - heuristic and statistical comment moderation
#[derive(Parser, Debug, Clone)]
#[command(name = "civility")]
#[command(about = "Classify user comments into moderation categories")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CivilityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CivilityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier from a labeled CSV dataset
    Train(TrainArgs),

    /// Classify a single comment
    Classify(ClassifyArgs),

    /// Classify a file of comments, one per line
    #[command(name = "classify-batch")]
    ClassifyBatch(ClassifyBatchArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the labeled CSV dataset
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Directory the artifact pair is written into
    #[arg(short, long, value_name = "DIR", default_value = "model")]
    pub model_dir: PathBuf,

    /// Training mode
    #[arg(long, default_value = "multi")]
    pub mode: ModeArg,

    /// Held-out fraction for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_ratio: f64,

    /// Shuffle seed for the reproducible split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for classifying one comment
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The comment text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Directory holding the trained artifact pair
    #[arg(short, long, value_name = "DIR", default_value = "model")]
    pub model_dir: PathBuf,
}

/// Arguments for classifying a batch file
#[derive(Parser, Debug, Clone)]
pub struct ClassifyBatchArgs {
    /// File with one comment per line
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory holding the trained artifact pair
    #[arg(short, long, value_name = "DIR", default_value = "model")]
    pub model_dir: PathBuf,
}

/// Training mode selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeArg {
    /// Six independent flags per comment
    Multi,
    /// One collapsed Toxic/Safe label
    Single,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
