// src/config/validate.rs

use crate::config::model::{ProcessParameters, RawProcessParameters};
use crate::errors::{BlockError, Result};

impl TryFrom<RawProcessParameters> for ProcessParameters {
    type Error = crate::errors::BlockError;

    fn try_from(raw: RawProcessParameters) -> std::result::Result<Self, Self::Error> {
        let input = require(raw.input, "input")?;
        let output = require(raw.output, "output")?;
        let ruleset_path = require(raw.ruleset_path, "ruleset_path")?;

        Ok(ProcessParameters::new_unchecked(
            input,
            output,
            ruleset_path,
            raw.block_parameters.unwrap_or_default(),
        ))
    }
}

fn require<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| BlockError::MissingParameter(key.to_string()))
}
