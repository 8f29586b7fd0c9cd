// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Compute a working-calendar timeline from per-author task lists and their dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Plan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Plan.toml")]
    pub plan: String,

    /// Instant the first tasks start at (e.g. `2026-10-19T09:00`).
    ///
    /// Overrides `[config].start`; if neither is given, the local time now.
    #[arg(long, value_name = "DATETIME")]
    pub start: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Markwhen)]
    pub format: OutputFormat,

    /// Fail if any task cannot be scheduled because of a dependency cycle.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print tasks and dependency edges, but don't schedule.
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

/// Rendering of the computed schedule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// markwhen timeline text, one section per author feature.
    Markwhen,
    /// Pretty-printed JSON report.
    Json,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
