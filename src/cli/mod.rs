//! CLI module for synclog.
//!
//! This module provides the command-line interface using Clap.

use crate::config::Config;
use crate::internal;
use crate::level::Severity;
use crate::registry::Registry;
use crate::sink::FileSink;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Severity for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogSeverity {
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "err")]
    Error,
    #[value(alias = "crit")]
    Critical,
}

impl From<LogSeverity> for Severity {
    fn from(severity: LogSeverity) -> Self {
        match severity {
            LogSeverity::Debug => Self::Debug,
            LogSeverity::Info => Self::Info,
            LogSeverity::Warning => Self::Warning,
            LogSeverity::Error => Self::Error,
            LogSeverity::Critical => Self::Critical,
        }
    }
}

/// synclog - Append log lines from the command line.
#[derive(Parser)]
#[command(name = "synclog", version, about = "Append log lines from the command line")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Write to this file instead of the configured sink
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log one line.
    Log {
        /// Severity tag
        #[arg(value_enum)]
        severity: LogSeverity,
        /// Message words, joined by spaces
        #[arg(required = true)]
        message: Vec<String>,
        /// Leave the line unterminated
        #[arg(long)]
        no_newline: bool,
    },
    /// Log one sample line per severity.
    Demo,
}

/// Loads the config named on the command line (or the default one) and installs it into `registry`.
///
/// # Errors
/// Fails when the config file exists but cannot be read or parsed.
pub fn configure(cli: &Cli, registry: &Registry) -> Result<(), crate::Error> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply(registry);

    if let Some(path) = &cli.file {
        match FileSink::open(path) {
            Ok(sink) => registry.set_sink(sink),
            Err(e) => {
                internal::error("CLI", &format!("Failed to open {}: {e}", path.display()));
                registry.clear_sink();
            }
        }
    }
    Ok(())
}

/// Runs the parsed subcommand against `registry`.
#[must_use]
pub fn run(command: &Command, registry: &Registry) -> ExitCode {
    match command {
        Command::Log {
            severity,
            message,
            no_newline,
        } => {
            registry
                .line_with((*severity).into(), !no_newline)
                .append(message.join(" "));
        }
        Command::Demo => cmd_demo(registry),
    }
    ExitCode::SUCCESS
}

/// One line per severity, mixing text and numbers.
pub fn cmd_demo(registry: &Registry) {
    log_to!(registry, Severity::Debug, "Line ", 1);
    log_to!(registry, Severity::Info, "Line ", 2);
    log_to!(registry, Severity::Warning, "Pi = ", 3.141_592_653_59);
    log_to!(registry, Severity::Error, "Divide by zero");
    log_to!(registry, Severity::Critical, "Line ", "End");
}
