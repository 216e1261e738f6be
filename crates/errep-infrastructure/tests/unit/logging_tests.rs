//! Logging Tests

use errep_infrastructure::constants::DEFAULT_LOG_LEVEL;
use errep_infrastructure::logging::{LoggingConfig, level_filter, parse_log_level};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_invalid_log_level_is_a_configuration_error() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_level_filter_uses_parsed_level() {
    let filter = level_filter(parse_log_level("warning").unwrap());
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

    let filter = level_filter(parse_log_level("DEBUG").unwrap());
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
}
