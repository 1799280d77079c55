use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{level_to_log_level, log_level_to_level, parse_log_level};
use std::sync::Once;
use tempfile::tempdir;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            file: None,
            stdout: true,
        };

        assert!(crate::logging::init(&config).is_ok());
    });
}

#[test]
fn test_second_init_is_ignored() {
    let config = LoggingConfig::default();
    let _ = crate::logging::init(&config);
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_create_non_blocking_file_creates_directories() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("nested").join("ranker.log");

    let result = super::create_non_blocking_file(&log_path);
    assert!(result.is_ok());
    assert!(log_path.parent().unwrap().exists());
}

#[test]
fn test_create_non_blocking_file_rejects_missing_name() {
    assert!(super::create_non_blocking_file("/").is_err());
}

#[test]
fn test_level_conversion() {
    assert!(parse_log_level("trace").is_ok());
    assert!(parse_log_level("DEBUG").is_ok());
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("invalid").is_err());

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);

    assert_eq!(log_level_to_level(&LogLevel::Warn), tracing::Level::WARN);
}

#[test]
fn test_init_reports_unwritable_log_file() {
    let mut config = crate::config::RecencyConfig::default();
    config.logging.file = Some(std::path::PathBuf::from("/"));

    let result = crate::init(config);
    assert!(matches!(result, Err(crate::RecencyError::Logging(_))));
}
