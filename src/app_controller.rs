use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::filter::report::{format_record, truncate_chars};
use crate::filter::{has_latin_letters, FilterMode, FilterOutcome, LineFilter, RejectionReason};

// @module: Application controller for corpus filtering

/// Outcomes of a full run: quick filter followed by strict filter
#[derive(Debug, Clone)]
pub struct FullRunOutcome {
    pub quick: FilterOutcome,
    pub strict: FilterOutcome,
    /// Strict-filtered lines among the verified ones that still contain Latin letters
    pub latin_leftovers: Vec<(usize, String)>,
}

/// Main application controller for line filtering
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Quick filter: drop lines with Latin letters, no log
    pub fn run_quick(&self, input: &Path, output: &Path) -> Result<FilterOutcome, AppError> {
        let outcome = self.run_mode(FilterMode::Quick, input, output)?;
        self.report_quick(&outcome);
        Ok(outcome)
    }

    /// Strict filter: Latin letters, Roman numerals and quoted Latin words
    pub fn run_strict(&self, input: &Path, output: &Path) -> Result<FilterOutcome, AppError> {
        let outcome = self.run_mode(FilterMode::Strict, input, output)?;
        self.report_strict(&outcome);
        Ok(outcome)
    }

    /// Legacy full filter: Latin letters only, with a removal log
    pub fn run_legacy(&self, input: &Path, output: &Path) -> Result<FilterOutcome, AppError> {
        let outcome = self.run_mode(FilterMode::Legacy, input, output)?;
        self.report_legacy(&outcome);
        Ok(outcome)
    }

    /// Run the quick and strict filters over the configured paths, then
    /// preview and re-check the strict output
    pub fn run_all(&self) -> Result<FullRunOutcome, AppError> {
        let input = self.config.input_path.as_path();
        Config::validate_output(input, &self.config.quick_output_path)?;
        Config::validate_output(input, &self.config.strict_output_path)?;

        info!("{}", "=".repeat(60));
        info!("QUICK FILTER (Latin letters)");
        info!("{}", "=".repeat(60));
        let quick = self.run_quick(input, &self.config.quick_output_path)?;

        info!("{}", "=".repeat(60));
        info!("STRICT FILTER");
        info!("{}", "=".repeat(60));
        let strict = self.run_strict(input, &self.config.strict_output_path)?;

        self.preview(&strict.kept_lines);
        let latin_leftovers = self.verify_no_latin(&strict.kept_lines);

        Ok(FullRunOutcome {
            quick,
            strict,
            latin_leftovers,
        })
    }

    fn run_mode(&self, mode: FilterMode, input: &Path, output: &Path) -> Result<FilterOutcome, AppError> {
        Config::validate_output(input, output)?;
        debug!("Running {} filter: {:?} -> {:?}", mode, input, output);

        let progress_bar = self.create_progress_bar(mode);
        let pb = progress_bar.clone();
        let result = LineFilter::new(mode).run_with_progress(input, output, move |completed, total| {
            if let Some(pb) = &pb {
                pb.set_length(total as u64);
                pb.set_position(completed as u64);
            }
        });

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        let outcome = result?;
        self.log_examples(&outcome);
        if let Some(log_path) = &outcome.log_path {
            info!("Removal log written to {:?}", log_path);
        }
        Ok(outcome)
    }

    fn create_progress_bar(&self, mode: FilterMode) -> Option<ProgressBar> {
        if !self.config.show_progress {
            return None;
        }

        let progress_bar = ProgressBar::new(0);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message(format!("{} filter", mode));
        Some(progress_bar)
    }

    fn report_quick(&self, outcome: &FilterOutcome) {
        let summary = &outcome.summary;
        info!("Quick filter results:");
        info!("Lines read: {}", summary.total_lines);
        info!("Lines kept: {}", summary.kept);
        info!("Lines removed: {}", summary.removed());
    }

    fn report_strict(&self, outcome: &FilterOutcome) {
        let summary = &outcome.summary;
        info!("STRICT FILTER COMPLETE:");
        info!("Pure lines kept: {}", summary.kept);
        info!("Removed: {} lines", summary.removed());
        for stats in &summary.categories {
            info!("  - {}: {}", stats.reason, stats.count);
        }
    }

    fn report_legacy(&self, outcome: &FilterOutcome) {
        let summary = &outcome.summary;
        let report = &self.config.report;
        info!("Legacy full filter results:");
        info!("Lines read: {}", summary.total_lines);
        info!("Lines kept (no Latin letters): {}", summary.kept);
        info!("Lines removed for Latin letters: {}", summary.removed());

        let examples = summary.examples_for(RejectionReason::Latin);
        if !examples.is_empty() {
            info!("Removed examples:");
            for record in examples.iter().take(report.console_examples) {
                info!("  Line {}: {}", record.line_number, truncate_chars(&record.text, report.example_truncate_chars));
            }
        }
    }

    fn preview(&self, lines: &[String]) {
        info!("{}", "=".repeat(60));
        info!("FIRST {} FILTERED LINES:", self.config.report.preview_count);
        info!("{}", "=".repeat(60));
        for (index, line) in lines.iter().take(self.config.report.preview_count).enumerate() {
            info!("{}: {}", index + 1, line);
        }
    }

    /// Re-check the first filtered lines for Latin letters.
    ///
    /// Returns 1-based positions in the filtered output with the offending text.
    pub fn verify_no_latin(&self, lines: &[String]) -> Vec<(usize, String)> {
        let report = &self.config.report;
        info!("{}", "=".repeat(60));
        info!("LATIN LETTER CHECK:");
        info!("{}", "=".repeat(60));

        let leftovers: Vec<(usize, String)> = lines
            .iter()
            .take(report.verify_count)
            .enumerate()
            .filter(|(_, line)| has_latin_letters(line))
            .map(|(index, line)| (index + 1, line.clone()))
            .collect();

        if leftovers.is_empty() {
            info!("✓ No Latin letters found");
        } else {
            for (position, line) in &leftovers {
                warn!("Found in line {}: {}", position, truncate_chars(line, report.verify_truncate_chars));
            }
        }

        leftovers
    }

    /// Log every retained example of a run at debug level
    fn log_examples(&self, outcome: &FilterOutcome) {
        for stats in &outcome.summary.categories {
            for record in &stats.examples {
                debug!("[{}] {}", stats.reason, format_record(record));
            }
        }
    }
}
