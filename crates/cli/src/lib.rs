//! Command-line interface for tesseract
//!
//! Parses flags and positional arguments, configures the console logger,
//! and drives one `load`/`execute` cycle of the engine.

use clap::Parser;
use std::path::PathBuf;
use tesseract_core::{ConsoleLogger, LogLevel, LogOptions};
use tesseract_engine::engine::DEFAULT_MANIFEST_PATH;
use tesseract_engine::{Engine, Invocation};

/// Configuration-driven project scaffolding
///
/// Runs a command defined in the manifest, substituting positional
/// parameters into template files and destination paths.
#[derive(Debug, Parser)]
#[command(name = "tesseract", version, about)]
pub struct Cli {
    /// Path to the manifest file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Show debug-level output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable ANSI coloring in log output
    #[arg(long)]
    pub no_color: bool,

    /// Omit the timestamp prefix from log output
    #[arg(long)]
    pub no_timestamp: bool,

    /// Omit the severity label from log output
    #[arg(long)]
    pub no_level: bool,

    /// Command to run, as declared in the manifest
    pub command: String,

    /// Positional parameter values, bound in manifest-declared order
    pub params: Vec<String>,
}

impl Cli {
    fn log_options(&self) -> LogOptions {
        LogOptions {
            timestamp: !self.no_timestamp,
            level: !self.no_level,
            color: !self.no_color,
        }
    }
}

/// Run one load/execute cycle for the parsed arguments
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let min_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let logger = ConsoleLogger::new(cli.log_options()).with_min_level(min_level);

    let mut engine = Engine::new(&cli.manifest).with_logger(Box::new(logger));
    let invocation = Invocation::new(cli.command, cli.params);

    engine.load(&invocation)?;
    engine.execute(&invocation)?;
    Ok(())
}
