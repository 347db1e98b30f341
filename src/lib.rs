/*!
 * # kotoba-filter
 *
 * A Rust library for cleaning Japanese text corpora line by line, keeping
 * only lines free of Latin script for downstream use such as training data.
 *
 * ## Features
 *
 * - Three strictness levels:
 *   - Quick: drop lines containing any Latin letter
 *   - Strict: also drop Roman numerals and quoted Latin words
 *   - Legacy full: Latin letters only, with a removal log
 * - Per-category removal logs with line numbers
 * - Precompiled character-class predicates
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `filter`: Line classification and filtering:
 *   - `filter::predicates`: Character-class checks
 *   - `filter::classifier`: Filter modes and line classification
 *   - `filter::summary`: Run statistics
 *   - `filter::report`: Log rendering
 *   - `filter::pipeline`: File-to-file filter runs
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod filter;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError, FilterError};
pub use filter::{
    has_latin_letters, has_quoted_latin_word, has_roman_numeral, Classification, FilterMode,
    FilterOutcome, FilterSummary, LineFilter, LineRecord, RejectionReason,
};
