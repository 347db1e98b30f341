/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;

use kotoba_filter::errors::FilterError;
use kotoba_filter::file_utils::{derive_log_path, FileManager};
use crate::common;

/// Test that read_to_string reports a missing file as InputNotFound
#[test]
fn test_read_to_string_withMissingFile_shouldReturnInputNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.txt");

    let error = FileManager::read_to_string(&missing).unwrap_err();
    assert!(matches!(error, FilterError::InputNotFound(ref path) if path == &missing));

    Ok(())
}

/// Test that read_to_string rejects invalid UTF-8
#[test]
fn test_read_to_string_withInvalidUtf8_shouldReturnEncodingError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.txt");
    fs::write(&path, [0x82, 0xa0, 0xff, b'\n'])?;

    let error = FileManager::read_to_string(&path).unwrap_err();
    assert!(matches!(error, FilterError::Encoding { .. }));

    Ok(())
}

/// Test that write_lines terminates every line and creates parent directories
#[test]
fn test_write_lines_withNestedPath_shouldCreateDirectoriesAndTerminateLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("out.txt");

    FileManager::write_lines(&path, &["一行目", "二行目"])?;

    assert_eq!(fs::read_to_string(&path)?, "一行目\n二行目\n");

    Ok(())
}

/// Test that write_lines with no lines produces an empty file
#[test]
fn test_write_lines_withNoLines_shouldWriteEmptyFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("empty.txt");

    FileManager::write_lines::<_, String>(&path, &[])?;

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path)?, "");

    Ok(())
}

/// Test that an unwritable destination surfaces a Write error
#[test]
fn test_write_to_file_withDirectoryAsTarget_shouldReturnWriteError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let error = FileManager::write_to_file(temp_dir.path(), "x").unwrap_err();
    assert!(matches!(error, FilterError::Write { .. }));

    Ok(())
}

/// Test log path derivation for the strict and legacy suffixes
#[test]
fn test_derive_log_path_withTxtOutput_shouldReplaceExtension() {
    let strict = derive_log_path("book/japanese_pure_strict.txt", "_strict_filter.log");
    let legacy = derive_log_path("book/japanese_no_latin.txt", "_removed_latin.log");

    assert_eq!(strict, Path::new("book/japanese_pure_strict_strict_filter.log"));
    assert_eq!(legacy, Path::new("book/japanese_no_latin_removed_latin.log"));
}
