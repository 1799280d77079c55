//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating RecencyConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: RecencyConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: RecencyConfig::default(),
        }
    }

    /// Start from an existing configuration, e.g. one produced by [`super::ConfigLoader`].
    pub fn from_config(config: RecencyConfig) -> Self {
        Self { config }
    }

    /// Replace the priority field list.
    pub fn with_priority_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ranking.priority_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the narrow tie-break field list.
    pub fn with_narrow_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ranking.narrow_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the key suffixes used by the broad field scan.
    pub fn with_scan_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ranking.scan_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the identifier field name.
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.config.ranking.id_field = field.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Create a configuration for development with verbose logging.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a quiet configuration for embedding in other tools.
    pub fn minimal() -> Self {
        Self::new()
            .with_log_level(LogLevel::Warn)
            .with_log_format(LogFormat::Compact)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<RecencyConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
