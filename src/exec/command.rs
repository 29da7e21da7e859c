// src/exec/command.rs

//! Construction of the eCognition engine command line.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::config::{BlockParameters, DEFAULT_ENGINE};

/// A fully resolved engine command line: the program followed by its
/// arguments, each one a separate token (no shell involved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        let mut argv = vec![program.into()];
        argv.extend(args);
        Self { argv }
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Program and arguments as one list.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// Build the default engine command for one input product.
///
/// Shape: `./DIACmdEngine image=<input> ruleset=<ruleset>
/// --output-dir=<output> param:<key>=<value>...`, with the parameters in
/// the order of `ruleset_parameters`.
pub fn build_ecognition_cmd(
    ruleset_path: &Path,
    input_product_path: &Path,
    output_path: &Path,
    ruleset_parameters: &BlockParameters,
) -> Invocation {
    build_cmd_with_engine(
        DEFAULT_ENGINE,
        ruleset_path,
        input_product_path,
        output_path,
        ruleset_parameters,
    )
}

/// Like [`build_ecognition_cmd`] but with a custom engine executable.
pub fn build_cmd_with_engine(
    engine: &str,
    ruleset_path: &Path,
    input_product_path: &Path,
    output_path: &Path,
    ruleset_parameters: &BlockParameters,
) -> Invocation {
    let mut args = vec![
        format!("image={}", input_product_path.display()),
        format!("ruleset={}", ruleset_path.display()),
        format!("--output-dir={}", output_path.display()),
    ];
    args.extend(
        ruleset_parameters
            .iter()
            .map(|(key, value)| format!("param:{key}={}", param_value(value))),
    );

    Invocation::new(engine, args)
}

/// Strings go in verbatim; everything else as compact JSON.
fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
