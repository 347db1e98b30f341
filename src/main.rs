// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use kotoba_filter::app_config::{Config, LogLevel};
use kotoba_filter::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Input and output paths for a single filter run
#[derive(Parser, Debug)]
struct FilterArgs {
    /// Corpus file to filter (defaults to the configured input)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Destination for the kept lines (defaults to the configured output)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Paths for the full quick + strict run
#[derive(Parser, Debug)]
struct AllArgs {
    /// Corpus file to filter
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Destination for the quick filter
    #[arg(long, value_name = "FILE")]
    quick_output: Option<PathBuf>,

    /// Destination for the strict filter
    #[arg(long, value_name = "FILE")]
    strict_output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remove lines containing any Latin letter
    Quick(FilterArgs),

    /// Remove lines with Latin letters, Roman numerals or quoted Latin words, and write a log
    Strict(FilterArgs),

    /// Remove lines containing any Latin letter and write a removal log
    Legacy(FilterArgs),

    /// Run the quick and strict filters, then preview and re-check the result (default command)
    All(AllArgs),

    /// Generate shell completions for kotoba-filter
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// kotoba-filter - keep only pure Japanese lines
#[derive(Parser, Debug)]
#[command(name = "kotoba-filter")]
#[command(version)]
#[command(about = "Filter Latin script out of Japanese text corpora")]
#[command(long_about = "kotoba-filter removes every line that contains Latin letters, Roman numerals or quoted Latin words.

EXAMPLES:
    kotoba-filter                                         # Quick + strict run on the configured paths
    kotoba-filter quick -i corpus.txt -o no_latin.txt     # Latin letters only
    kotoba-filter strict -i corpus.txt -o pure.txt        # Writes pure_strict_filter.log too
    kotoba-filter legacy -i corpus.txt -o full.txt        # Writes full_removed_latin.log too
    kotoba-filter --config filter.json all                # Paths from a JSON config file
    kotoba-filter completions bash > kotoba-filter.bash   # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Records are filtered by log::max_level, which is adjusted after config load
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Default behavior - full run on the configured paths
    let command = cli.command.unwrap_or(Commands::All(AllArgs {
        input: None,
        quick_output: None,
        strict_output: None,
    }));

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    run_command(command, config)
}

fn load_config(config_path: Option<&PathBuf>) -> Result<Config> {
    Config::load_optional(config_path.map(PathBuf::as_path)).context("Failed to load configuration")
}

fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Quick(args) => {
            apply_filter_args(&mut config.input_path, &mut config.quick_output_path, args);
            let controller = Controller::with_config(config)?;
            let config = controller.config();
            controller.run_quick(&config.input_path, &config.quick_output_path)?;
        }
        Commands::Strict(args) => {
            apply_filter_args(&mut config.input_path, &mut config.strict_output_path, args);
            let controller = Controller::with_config(config)?;
            let config = controller.config();
            controller.run_strict(&config.input_path, &config.strict_output_path)?;
        }
        Commands::Legacy(args) => {
            apply_filter_args(&mut config.input_path, &mut config.legacy_output_path, args);
            let controller = Controller::with_config(config)?;
            let config = controller.config();
            controller.run_legacy(&config.input_path, &config.legacy_output_path)?;
        }
        Commands::All(args) => {
            if let Some(input) = args.input {
                config.input_path = input;
            }
            if let Some(quick_output) = args.quick_output {
                config.quick_output_path = quick_output;
            }
            if let Some(strict_output) = args.strict_output {
                config.strict_output_path = strict_output;
            }
            let controller = Controller::with_config(config)?;
            controller.run_all()?;
        }
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "kotoba-filter", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn apply_filter_args(input_path: &mut PathBuf, output_path: &mut PathBuf, args: FilterArgs) {
    if let Some(input) = args.input {
        *input_path = input;
    }
    if let Some(output) = args.output {
        *output_path = output;
    }
}
