//! Configuration model definitions.
//!
//! This module contains the configuration structures for all Recency components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Recency.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecencyConfig {
    /// Field detection and tie-break configuration
    pub ranking: RankingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Field names and patterns the ranker uses to find a record's timestamp.
///
/// The defaults describe the records returned by the operations dashboard API.
/// Other data sources can swap in their own conventions without touching the
/// ranking cascade itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RankingConfig {
    /// Well-known timestamp fields, checked in order before any scanning.
    /// The first one holding a valid timestamp decides the recency value.
    pub priority_fields: Vec<String>,

    /// Fields consulted for the first tie-break. The first one present with a
    /// non-empty value is used, whether or not it parses.
    pub narrow_fields: Vec<String>,

    /// Case-insensitive key suffixes that mark a field as timestamp-like
    /// during the broad scan.
    pub scan_suffixes: Vec<String>,

    /// Identifier field used as the last-resort recency value and for the
    /// id tie-breaks.
    pub id_field: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            priority_fields: to_strings(&[
                "updatedAt",
                "createdAt",
                "date",
                "expiryDate",
                "endContractDate",
                "timestamp",
                "created_at",
                "updated_at",
            ]),
            narrow_fields: to_strings(&["updatedAt", "createdAt", "date", "timestamp"]),
            scan_suffixes: to_strings(&["date", "time", "at"]),
            id_field: "id".to_string(),
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
