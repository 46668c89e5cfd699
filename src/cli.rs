// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `dagman`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagman",
    version,
    about = "Generate HTCondor DAGMan input files from a TOML description.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the DAG description (TOML).
    ///
    /// Default: `Dagman.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Write the DAG file here instead of `[dag].filename`.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGMAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the DAG to stdout, but don't write any files.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
