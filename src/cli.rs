// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag can also be supplied through the environment variable the
//! platform sets, so the block runs without arguments in production.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{BlockConfig, DEFAULT_ENGINE};

/// Command-line arguments for `ecognition-block`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ecognition-block",
    version,
    about = "Run an eCognition ruleset on every input product and publish output metadata.",
    long_about = None
)]
pub struct CliArgs {
    /// Input directory holding `data.json` and the products it references.
    #[arg(long, env = "UP42_INPUT_PATH", value_name = "DIR", default_value = "/tmp/input")]
    pub input: PathBuf,

    /// Output directory for engine results and the output `data.json`.
    #[arg(long, env = "UP42_OUTPUT_PATH", value_name = "DIR", default_value = "/tmp/output")]
    pub output: PathBuf,

    /// Quicklook directory (created, otherwise unused).
    #[arg(
        long,
        env = "UP42_QUICKLOOK_PATH",
        value_name = "DIR",
        default_value = "/tmp/quicklook"
    )]
    pub quicklook: PathBuf,

    /// eCognition ruleset to execute.
    #[arg(
        long,
        env = "UP42_RULESET_PATH",
        value_name = "PATH",
        default_value = "ruleset/ruleset.dcp"
    )]
    pub ruleset: PathBuf,

    /// Engine executable.
    #[arg(long, env = "ECOGNITION_ENGINE", value_name = "PATH", default_value = DEFAULT_ENGINE)]
    pub engine: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ECOGNITION_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate inputs and print the engine commands, but don't run them.
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

impl From<&CliArgs> for BlockConfig {
    fn from(args: &CliArgs) -> Self {
        BlockConfig {
            input_path: args.input.clone(),
            output_path: args.output.clone(),
            quicklook_path: args.quicklook.clone(),
            ruleset_path: args.ruleset.clone(),
            engine: args.engine.clone(),
            dry_run: args.dry_run,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
