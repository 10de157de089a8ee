//! Command line argument parsing for the word frequency CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Word frequency statistics for a text document
#[derive(Parser, Debug, Clone)]
#[command(name = "word-frequency-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordFrequencyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Json,
        global = true
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Text to analyze (takes precedence over --input and stdin)
    #[arg(long, global = true)]
    pub text: Option<String>,

    /// File to analyze; `.gz` files are decompressed
    #[arg(short, long, value_name = "PATH", global = true)]
    pub input: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordFrequencyArgs {
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
    /// Highest frequency of any word
    HighestFrequency,

    /// Frequency of a single word
    Frequency(FrequencyArgs),

    /// The most frequent words, highest first
    WordFrequency(WordFrequencyCountArgs),

    /// List the request paths served
    Endpoints,
}

#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    /// Word to count, case-insensitively
    #[arg(short, long)]
    pub word: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct WordFrequencyCountArgs {
    /// Number of words to return; must be a positive integer
    #[arg(short = 'n', long = "count", allow_hyphen_values = true)]
    pub n: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON body, as a request handler would send it
    Json,
    /// Human-readable output
    Text,
    /// CSV output
    Csv,
}
