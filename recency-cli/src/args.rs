//! Command argument structures
//!
//! This module contains the CLI argument structs for each command.

use clap::Args;
use std::path::PathBuf;

/// Where to read records from and how they are framed.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file to read; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Treat input as newline-delimited JSON (one record per line).
    /// Implied for files ending in .ndjson or .jsonl
    #[arg(long)]
    pub ndjson: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only print the N most recent records
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only explain the N most recent records
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
