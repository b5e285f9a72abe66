//! Usage:
//!   synclog log <severity> <message>...   Log one line
//!   synclog demo                          Log one sample line per severity
//!
//! Global options: `--config <path>`, `--file <path>`.

use clap::Parser;
use std::process::ExitCode;
use synclog::Registry;
use synclog::cli::{Cli, configure, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let registry = Registry::global();

    // Sink and prefixes must be installed before the first line is built
    if let Err(e) = configure(&cli, registry) {
        eprintln!("Error loading config: {e}");
        return ExitCode::FAILURE;
    }

    run(&cli.command, registry)
}
