//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;
use std::collections::HashSet;

/// Validate the entire configuration.
pub fn validate_config(config: &RecencyConfig) -> Result<(), ConfigError> {
    validate_ranking_config(&config.ranking)?;

    Ok(())
}

/// Validate ranking configuration.
pub fn validate_ranking_config(config: &RankingConfig) -> Result<(), ConfigError> {
    if config.id_field.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Id field name cannot be empty".to_string(),
        ));
    }

    if config.priority_fields.is_empty() && config.scan_suffixes.is_empty() {
        return Err(ConfigError::ValidationError(
            "At least one priority field or scan suffix is required".to_string(),
        ));
    }

    validate_field_list("priority_fields", &config.priority_fields)?;
    validate_field_list("narrow_fields", &config.narrow_fields)?;

    if config.scan_suffixes.iter().any(|s| s.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "scan_suffixes cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}

fn validate_field_list(name: &str, fields: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot contain empty field names",
                name
            )));
        }
        if !seen.insert(field.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "{} lists '{}' more than once",
                name, field
            )));
        }
    }
    Ok(())
}
