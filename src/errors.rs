/*!
 * Error types for the kotoba-filter application.
 *
 * This module contains custom error types for the filtering pipeline and
 * configuration handling, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur while reading, filtering or writing a corpus
#[derive(Error, Debug)]
pub enum FilterError {
    /// The input file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read
    #[error("Failed to read input file {}: {source}", .path.display())]
    Read {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8
    #[error("Input file {} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        /// Path of the input file
        path: PathBuf,
        /// Underlying decoding error
        #[source]
        source: FromUtf8Error,
    },

    /// An output or log file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the file being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file could not be opened
    #[error("Failed to open config file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `Config`
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is missing or inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the filtering pipeline
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
