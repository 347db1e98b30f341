use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Corpus to filter
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Destination of the quick filter
    #[serde(default = "default_quick_output_path")]
    pub quick_output_path: PathBuf,

    /// Destination of the strict filter
    #[serde(default = "default_strict_output_path")]
    pub strict_output_path: PathBuf,

    /// Destination of the legacy full filter
    #[serde(default = "default_legacy_output_path")]
    pub legacy_output_path: PathBuf,

    /// Console report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Show a progress bar while classifying lines
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Console report configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    // @field: Removed examples printed after a legacy run
    #[serde(default = "default_console_examples")]
    pub console_examples: usize,

    // @field: Character limit for printed examples
    #[serde(default = "default_example_truncate_chars")]
    pub example_truncate_chars: usize,

    // @field: Filtered lines previewed after a full run
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,

    // @field: Filtered lines re-checked for Latin letters after a full run
    #[serde(default = "default_verify_count")]
    pub verify_count: usize,

    // @field: Character limit for lines reported by the re-check
    #[serde(default = "default_verify_truncate_chars")]
    pub verify_truncate_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            console_examples: default_console_examples(),
            example_truncate_chars: default_example_truncate_chars(),
            preview_count: default_preview_count(),
            verify_count: default_verify_count(),
            verify_truncate_chars: default_verify_truncate_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("book_japanese/parsed_sentences/japanese_final_unique.txt")
}

fn default_quick_output_path() -> PathBuf {
    PathBuf::from("book_japanese/parsed_sentences/japanese_no_latin.txt")
}

fn default_strict_output_path() -> PathBuf {
    PathBuf::from("book_japanese/parsed_sentences/japanese_pure_strict.txt")
}

fn default_legacy_output_path() -> PathBuf {
    PathBuf::from("book_japanese/parsed_sentences/japanese_no_latin_full.txt")
}

fn default_console_examples() -> usize {
    5
}

fn default_example_truncate_chars() -> usize {
    80
}

fn default_preview_count() -> usize {
    10
}

fn default_verify_count() -> usize {
    100
}

fn default_verify_truncate_chars() -> usize {
    50
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configuration file if one was given, otherwise use defaults.
    ///
    /// A path that was given but does not exist is an error rather than a
    /// silent fallback.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration for required values.
    ///
    /// Output paths are checked per run with [`Config::validate_output`],
    /// since each mode only writes its own destination.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("input path is empty".to_string()));
        }
        Ok(())
    }

    // @checks: Output is set and does not overwrite the input
    pub fn validate_output(input: &Path, output: &Path) -> Result<(), ConfigError> {
        if output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output path is empty".to_string()));
        }
        if output == input {
            return Err(ConfigError::Invalid(format!(
                "output path must differ from the input path: {}",
                output.display()
            )));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: default_input_path(),
            quick_output_path: default_quick_output_path(),
            strict_output_path: default_strict_output_path(),
            legacy_output_path: default_legacy_output_path(),
            report: ReportConfig::default(),
            show_progress: default_true(),
            log_level: LogLevel::default(),
        }
    }
}
