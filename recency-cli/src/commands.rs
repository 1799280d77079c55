//! Command definitions
//!
//! This module contains the top-level parser and the command enum.

use crate::args::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recency")]
#[command(about = "Rank JSON records from most to least recent", long_about = None)]
#[command(version = recency::VERSION)]
pub struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true, env = "RECENCY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (table, json, ndjson) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true, env = "RECENCY_OUTPUT")]
    pub output: String,

    /// Use machine-readable output (alias for --output json)
    #[arg(long, global = true)]
    pub machine: bool,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// Print records sorted from most to least recent
    #[command(
        alias = "sort",
        long_about = r#"
Sort records so the most recently relevant come first.

Each record is scored by the first valid timestamp among the priority fields
(updatedAt, createdAt, date, expiryDate, endContractDate, timestamp,
created_at, updated_at), then by any field whose name ends in date/time/at,
then by its numeric id. Ties fall back to a narrower timestamp chain and
finally to the id itself.

Examples:
  recency rank miners.json
  curl -s $API/shafts | recency rank --limit 5 -o json
  recency rank events.ndjson -o ndjson
"#
    )]
    Rank(RankArgs),

    /// Show how each record was scored
    Explain(ExplainArgs),

    /// Print the effective configuration
    Config,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
