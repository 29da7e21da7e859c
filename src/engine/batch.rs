// src/engine/batch.rs

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::config::{DEFAULT_ENGINE, ProcessParameters, RawProcessParameters};
use crate::errors::{BlockError, Result};
use crate::exec::{ExecutorBackend, Invocation, build_cmd_with_engine};
use crate::fs::ensure_parent_dir;
use crate::metadata::{DATA_PATH_KEY, Feature, FeatureCollection, Properties, create_metadata_copy};

/// Everything resolved for one input feature before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePlan {
    /// Position of the feature in the input collection.
    pub index: usize,
    /// `input / data_path`, known to exist.
    pub input_product: PathBuf,
    /// Same relative path re-rooted under the output base.
    pub output_product: PathBuf,
    /// Product path relative to both bases.
    pub relative_path: PathBuf,
    pub invocation: Invocation,
}

/// Runs the engine once per input feature, strictly in order.
///
/// Any failure aborts the whole batch; there is no partial result.
pub struct BatchRunner<E: ExecutorBackend> {
    params: ProcessParameters,
    engine: String,
    executor: E,
}

impl<E: ExecutorBackend> fmt::Debug for BatchRunner<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchRunner")
            .field("params", &self.params)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend> BatchRunner<E> {
    /// Validate parameters and check that the ruleset exists.
    ///
    /// The ruleset check happens once here, not per feature.
    pub fn new(raw: RawProcessParameters, executor: E) -> Result<Self> {
        let params = ProcessParameters::try_from(raw)?;

        if !params.ruleset_path.exists() {
            return Err(BlockError::NoRuleset(params.ruleset_path));
        }

        Ok(Self {
            params,
            engine: DEFAULT_ENGINE.to_string(),
            executor,
        })
    }

    /// Use a different engine executable than `./DIACmdEngine`.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn params(&self) -> &ProcessParameters {
        &self.params
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Resolve paths and build the invocation for one feature.
    ///
    /// Only reads the filesystem; nothing is created or executed.
    pub fn plan_feature(&self, index: usize, feature: &Feature) -> Result<FeaturePlan> {
        let data_path = feature.data_path().ok_or_else(|| {
            BlockError::InvalidMetadata(format!(
                "feature {index} has no string property '{DATA_PATH_KEY}'"
            ))
        })?;

        let input_product = self.params.input.join(data_path);
        if !input_product.exists() {
            return Err(BlockError::ProductNotFound(input_product));
        }

        let relative_path = relative_product_path(&input_product, &self.params.input)
            .ok_or_else(|| {
                BlockError::InvalidMetadata(format!(
                    "feature {index}: data path '{data_path}' is outside the input directory"
                ))
            })?;
        let output_product = self.params.output.join(&relative_path);

        // The engine gets the output base, not the per-product path.
        let invocation = build_cmd_with_engine(
            &self.engine,
            &self.params.ruleset_path,
            &input_product,
            &self.params.output,
            &self.params.block_parameters,
        );

        Ok(FeaturePlan {
            index,
            input_product,
            output_product,
            relative_path,
            invocation,
        })
    }

    /// Plan every feature of `input_fc`, stopping at the first error.
    pub fn plan(&self, input_fc: &FeatureCollection) -> Result<Vec<FeaturePlan>> {
        input_fc
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| self.plan_feature(index, feature))
            .collect()
    }

    /// Process all features and return the output collection.
    pub async fn process(&mut self, input_fc: &FeatureCollection) -> Result<FeatureCollection> {
        info!(
            features = input_fc.len(),
            ruleset = %self.params.ruleset_path.display(),
            "processing input products"
        );

        let mut results = Vec::with_capacity(input_fc.len());
        for (index, in_feature) in input_fc.features.iter().enumerate() {
            let plan = self.plan_feature(index, in_feature)?;
            info!(
                feature = index,
                input = %plan.input_product.display(),
                "processing product"
            );

            ensure_parent_dir(&plan.output_product)?;

            self.executor.execute(&plan.invocation).await?;

            let mut overrides = Properties::new();
            overrides.insert(
                DATA_PATH_KEY.to_string(),
                Value::String(plan.relative_path.to_string_lossy().into_owned()),
            );
            results.push(create_metadata_copy(in_feature, overrides));

            debug!(
                feature = index,
                output = %plan.output_product.display(),
                "product done"
            );
        }

        Ok(FeatureCollection::new(results))
    }
}

/// `product` relative to `base`, refusing anything that would leave it.
fn relative_product_path(product: &Path, base: &Path) -> Option<PathBuf> {
    let relative = product.strip_prefix(base).ok()?;
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || relative.as_os_str().is_empty() {
        return None;
    }
    Some(relative.to_path_buf())
}

/// Validate `parameters`, then process `input_fc` with `executor`.
///
/// Convenience wrapper around [`BatchRunner`] using the default engine.
pub async fn process<E: ExecutorBackend>(
    parameters: RawProcessParameters,
    input_fc: &FeatureCollection,
    executor: E,
) -> Result<FeatureCollection> {
    BatchRunner::new(parameters, executor)?.process(input_fc).await
}
