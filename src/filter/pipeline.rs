/*!
 * End-to-end filter runs: read the corpus, classify every line, write the
 * accepted lines and, when the mode asks for it, a log of removed lines.
 */

use log::debug;
use std::path::{Path, PathBuf};

use super::classifier::{non_empty_records, FilterMode, LineRecord};
use super::report::render_log;
use super::summary::FilterSummary;
use crate::errors::FilterError;
use crate::file_utils::{derive_log_path, FileManager};

/// Accepted lines and statistics of an in-memory filter pass
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// Accepted lines in input order
    pub kept_lines: Vec<String>,
    pub summary: FilterSummary,
}

/// Result of a complete file-to-file filter run
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub kept_lines: Vec<String>,
    pub summary: FilterSummary,
    pub output_path: PathBuf,
    /// Path of the written log file, if any lines were removed and the mode keeps a log
    pub log_path: Option<PathBuf>,
}

/// Line filter for one strictness level
#[derive(Debug, Clone, Copy)]
pub struct LineFilter {
    mode: FilterMode,
}

impl LineFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Filter already-loaded content
    pub fn filter_content(&self, content: &str) -> FilterResult {
        self.filter_records(non_empty_records(content).collect(), |_, _| {})
    }

    /// Filter pre-split records, reporting `(completed, total)` after each line
    pub fn filter_records<F>(&self, records: Vec<LineRecord>, mut on_progress: F) -> FilterResult
    where
        F: FnMut(usize, usize),
    {
        let total = records.len();
        let mut kept_lines = Vec::with_capacity(total);
        let mut summary = FilterSummary::new(self.mode);

        for (index, record) in records.into_iter().enumerate() {
            let classification = self.mode.classify(&record.text);
            if classification.is_accepted() {
                kept_lines.push(record.text.clone());
            }
            summary.record(record, classification);
            on_progress(index + 1, total);
        }

        FilterResult { kept_lines, summary }
    }

    /// Filter `input_path` into `output_path`
    pub fn run<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input_path: P1,
        output_path: P2,
    ) -> Result<FilterOutcome, FilterError> {
        self.run_with_progress(input_path, output_path, |_, _| {})
    }

    /// Filter `input_path` into `output_path`, reporting per-line progress.
    ///
    /// The whole input is read and classified before anything is written.
    pub fn run_with_progress<P1, P2, F>(
        &self,
        input_path: P1,
        output_path: P2,
        on_progress: F,
    ) -> Result<FilterOutcome, FilterError>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
        F: FnMut(usize, usize),
    {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let content = FileManager::read_to_string(input_path)?;
        let records: Vec<LineRecord> = non_empty_records(&content).collect();
        debug!("{} filter: {} non-empty lines in {:?}", self.mode, records.len(), input_path);

        let FilterResult { kept_lines, summary } = self.filter_records(records, on_progress);

        FileManager::write_lines(output_path, &kept_lines)?;
        debug!("Wrote {} lines to {:?}", kept_lines.len(), output_path);

        let log_path = match self.mode.log_suffix() {
            Some(suffix) if summary.has_rejections() => {
                let log_path = derive_log_path(output_path, suffix);
                FileManager::write_to_file(&log_path, &render_log(&summary))?;
                debug!("Wrote removal log to {:?}", log_path);
                Some(log_path)
            }
            _ => None,
        };

        Ok(FilterOutcome {
            kept_lines,
            summary,
            output_path: output_path.to_path_buf(),
            log_path,
        })
    }
}
