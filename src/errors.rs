// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("No ruleset to execute (expected at {})", .0.display())]
    NoRuleset(PathBuf),

    #[error("No product found at {}", .0.display())]
    ProductNotFound(PathBuf),

    #[error("Invalid task parameters: {0}")]
    TaskParameters(#[source] serde_json::Error),

    #[error("Failed to parse metadata at {}: {source}", path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Uniform failure of a single engine run.
///
/// Launch failures and non-zero exits are both reported through this type so
/// callers only have one thing to match on.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("eCognition run failed with exception: {0}")]
    Launch(#[source] std::io::Error),

    #[error("eCognition run failed with error code {0}")]
    ExitCode(i32),
}

pub type Result<T> = std::result::Result<T, BlockError>;
