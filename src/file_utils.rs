use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::FilterError;

// @module: File utilities for corpus input and filter output

// @const: Extension replaced when deriving a log path
const TEXT_EXTENSION: &str = ".txt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a whole UTF-8 file into memory.
    ///
    /// A missing file, an unreadable file and invalid UTF-8 are reported as
    /// distinct [`FilterError`] variants.
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, FilterError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FilterError::InputNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| FilterError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|source| FilterError::Encoding {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a string to a file, creating parent directories as needed
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FilterError> {
        let path = path.as_ref();
        let write_error = |source| FilterError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent).map_err(write_error)?;
        }

        fs::write(path, content).map_err(write_error)
    }

    /// Write lines to a file, each terminated by a newline
    pub fn write_lines<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<(), FilterError> {
        let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
        let mut content = String::with_capacity(capacity);
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }
        Self::write_to_file(path, &content)
    }
}

/// Derive the log file path that accompanies a filtered output file.
///
/// `corpus.txt` becomes `corpus<suffix>`. File names without a trailing
/// `.txt` keep their full name and get the suffix appended
/// (`corpus.csv` becomes `corpus.csv<suffix>`). Only the file name is
/// rewritten, never the parent directories.
pub fn derive_log_path<P: AsRef<Path>>(output_path: P, suffix: &str) -> PathBuf {
    let output_path = output_path.as_ref();
    let file_name = output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = file_name.strip_suffix(TEXT_EXTENSION).unwrap_or(&file_name);
    let mut log_name = OsString::from(stem);
    log_name.push(suffix);

    output_path.with_file_name(log_name)
}
