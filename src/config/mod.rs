// src/config/mod.rs

//! Configuration for the block.
//!
//! Responsibilities:
//! - Define the configuration values (`model.rs`).
//! - Read task parameters from the environment (`loader.rs`).
//! - Validate orchestrator parameters (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{TASK_PARAMETERS_ENV, describe_params, load_params, load_params_from_env};
pub use model::{
    BlockConfig, BlockParameters, DEFAULT_ENGINE, METADATA_FILE_NAME, ProcessParameters,
    RawProcessParameters,
};
