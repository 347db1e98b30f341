/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::path::{Path, PathBuf};

use kotoba_filter::app_config::{Config, LogLevel};
use kotoba_filter::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(
        config.input_path,
        PathBuf::from("book_japanese/parsed_sentences/japanese_final_unique.txt")
    );
    assert_eq!(
        config.strict_output_path,
        PathBuf::from("book_japanese/parsed_sentences/japanese_pure_strict.txt")
    );
    assert_eq!(config.report.console_examples, 5);
    assert_eq!(config.report.example_truncate_chars, 80);
    assert_eq!(config.report.preview_count, 10);
    assert_eq!(config.report.verify_count, 100);
    assert!(config.show_progress);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    config.input_path = PathBuf::new();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = Config::default();
    assert!(matches!(
        Config::validate_output(&config.input_path, &config.input_path),
        Err(ConfigError::Invalid(_))
    ));
    assert!(Config::validate_output(&config.input_path, Path::new("")).is_err());
    assert!(Config::validate_output(&config.input_path, &config.strict_output_path).is_ok());
}

/// Test that outputs of other modes do not take part in validation
#[test]
fn test_config_validation_withInputEqualToUnusedOutput_shouldSucceed() {
    let mut config = Config::default();
    config.input_path = config.strict_output_path.clone();

    assert!(config.validate().is_ok());
    assert!(Config::validate_output(&config.input_path, &config.quick_output_path).is_ok());
}

/// Test loading a partial JSON config fills in defaults
#[test]
fn test_config_load_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "filter.json",
        r#"{ "input_path": "corpus.txt", "log_level": "debug", "report": { "preview_count": 3 } }"#,
    )?;

    let config = Config::load(&path)?;

    assert_eq!(config.input_path, PathBuf::from("corpus.txt"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.report.preview_count, 3);
    assert_eq!(config.report.verify_count, 100);
    assert_eq!(config.quick_output_path, Config::default().quick_output_path);

    Ok(())
}

/// Test loading malformed JSON reports a parse error
#[test]
fn test_config_load_withMalformedJson_shouldReturnParseError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    assert!(matches!(
        Config::load(temp_dir.path().join("absent.json")),
        Err(ConfigError::Open { .. })
    ));

    Ok(())
}

/// Test that an explicitly given config file must exist
#[test]
fn test_config_loadOptional_withMissingPath_shouldReturnNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("absent.json");

    assert!(matches!(
        Config::load_optional(Some(missing.as_path())),
        Err(ConfigError::NotFound(ref path)) if *path == missing
    ));

    Ok(())
}

/// Test that no config path falls back to defaults and a present one is loaded
#[test]
fn test_config_loadOptional_withNoneOrExistingPath_shouldLoad() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "filter.json", r#"{ "show_progress": false }"#)?;

    assert!(Config::load_optional(None)?.show_progress);
    assert!(!Config::load_optional(Some(path.as_path()))?.show_progress);

    Ok(())
}

/// Test log level conversion to the log facade
#[test]
fn test_log_level_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
}
