// src/config/model.rs

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Task parameters handed to the block by the platform.
///
/// Iteration order follows the order of the source JSON object.
pub type BlockParameters = Map<String, Value>;

/// File name of the metadata document inside the input and output bases.
pub const METADATA_FILE_NAME: &str = "data.json";

/// Default eCognition command line engine, relative to the working dir.
pub const DEFAULT_ENGINE: &str = "./DIACmdEngine";

/// Block-wide configuration, built once at startup.
///
/// Everything that used to be read from the environment at import time
/// lives here and is passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub quicklook_path: PathBuf,
    pub ruleset_path: PathBuf,
    pub engine: String,
    pub dry_run: bool,
}

impl BlockConfig {
    pub fn input_metadata_path(&self) -> PathBuf {
        self.input_path.join(METADATA_FILE_NAME)
    }

    pub fn output_metadata_path(&self) -> PathBuf {
        self.output_path.join(METADATA_FILE_NAME)
    }

    /// Directories that must exist before processing starts.
    pub fn directories(&self) -> [&Path; 3] {
        [&self.input_path, &self.output_path, &self.quicklook_path]
    }

    /// Orchestrator parameters derived from this config.
    pub fn process_parameters(&self, block_parameters: BlockParameters) -> RawProcessParameters {
        RawProcessParameters {
            input: Some(self.input_path.clone()),
            output: Some(self.output_path.clone()),
            ruleset_path: Some(self.ruleset_path.clone()),
            block_parameters: Some(block_parameters),
        }
    }
}

/// Unvalidated orchestrator parameters.
///
/// Every key is optional here; converting into [`ProcessParameters`] reports
/// the first missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProcessParameters {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub ruleset_path: Option<PathBuf>,
    pub block_parameters: Option<BlockParameters>,
}

/// Validated orchestrator parameters.
///
/// Only obtainable through `TryFrom<RawProcessParameters>`, see
/// [`crate::config::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessParameters {
    pub input: PathBuf,
    pub output: PathBuf,
    pub ruleset_path: PathBuf,
    pub block_parameters: BlockParameters,
}

impl ProcessParameters {
    pub(crate) fn new_unchecked(
        input: PathBuf,
        output: PathBuf,
        ruleset_path: PathBuf,
        block_parameters: BlockParameters,
    ) -> Self {
        Self {
            input,
            output,
            ruleset_path,
            block_parameters,
        }
    }
}
