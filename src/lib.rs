// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod metadata;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{BlockConfig, BlockParameters, describe_params, load_params_from_env};
use crate::engine::BatchRunner;
use crate::exec::{ExecutorBackend, ProcessExecutor};
use crate::fs::initialize_directories;
use crate::metadata::{load_metadata, save_metadata};

/// High-level entry point used by `main.rs`.
///
/// Builds the [`BlockConfig`] once, reads the task parameters from the
/// process environment and runs the block with the real engine.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = BlockConfig::from(&args);
    let block_parameters = load_params_from_env()?;
    run_block(&config, block_parameters, ProcessExecutor::new()).await
}

/// Run the block for an explicit configuration.
///
/// This wires together:
/// - directory initialisation
/// - input metadata loading
/// - the batch runner (or the dry-run planner)
/// - output metadata writing
pub async fn run_block<E: ExecutorBackend>(
    config: &BlockConfig,
    block_parameters: BlockParameters,
    executor: E,
) -> Result<()> {
    info!("initializing block");
    if !config.dry_run {
        initialize_directories(&config.directories())?;
    }
    info!(params = %describe_params(&block_parameters), "block parameters retrieved");

    let input_fc = load_metadata(config.input_metadata_path())?;
    let mut runner = BatchRunner::new(config.process_parameters(block_parameters), executor)?
        .with_engine(config.engine.as_str());

    if config.dry_run {
        print_dry_run(config, &runner, &input_fc)?;
        return Ok(());
    }

    let result = runner.process(&input_fc).await?;
    save_metadata(config.output_metadata_path(), &result)?;
    info!(
        path = %config.output_metadata_path().display(),
        features = result.len(),
        "metadata saved"
    );
    Ok(())
}

/// Print the engine commands that a real run would execute.
fn print_dry_run<E: ExecutorBackend>(
    config: &BlockConfig,
    runner: &BatchRunner<E>,
    input_fc: &metadata::FeatureCollection,
) -> Result<()> {
    let plans = runner.plan(input_fc)?;

    println!("ecognition-block dry-run");
    println!("  ruleset = {}", config.ruleset_path.display());
    println!("  output metadata = {}", config.output_metadata_path().display());
    println!();
    println!("products ({}):", plans.len());
    for plan in &plans {
        println!("  - {}", plan.relative_path.display());
        println!("      cmd: {}", plan.invocation);
    }

    Ok(())
}
