#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ecognition_block::config::{BlockConfig, DEFAULT_ENGINE};
use ecognition_block::metadata::{DATA_PATH_KEY, Feature, FeatureCollection, Properties};
use serde_json::{Value, json};

/// Builder for `Feature` to simplify test setup.
pub struct FeatureBuilder {
    feature: Feature,
}

impl FeatureBuilder {
    /// Feature pointing at `data_path`, with a unit-square geometry.
    pub fn new(data_path: &str) -> Self {
        let mut properties = Properties::new();
        properties.insert(DATA_PATH_KEY.to_string(), json!(data_path));
        Self {
            feature: Feature::new(
                Some(json!({
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
                })),
                Some(json!([0.0, 0.0, 1.0, 1.0])),
                properties,
            ),
        }
    }

    pub fn property(mut self, key: &str, value: Value) -> Self {
        self.feature.properties.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Feature {
        self.feature
    }
}

/// Builder for `FeatureCollection`.
#[derive(Default)]
pub struct FeatureCollectionBuilder {
    features: Vec<Feature>,
}

impl FeatureCollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn build(self) -> FeatureCollection {
        FeatureCollection::new(self.features)
    }
}

/// Scratch block layout: input, output and quicklook directories plus a
/// ruleset file, all inside a temporary directory.
pub struct BlockLayout {
    root: tempfile::TempDir,
}

impl BlockLayout {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("creating temp dir");
        let layout = Self { root };
        fs::create_dir_all(layout.input()).expect("creating input dir");
        fs::create_dir_all(layout.ruleset().parent().unwrap()).expect("creating ruleset dir");
        fs::write(layout.ruleset(), b"ruleset").expect("writing ruleset");
        layout
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn input(&self) -> PathBuf {
        self.root().join("input")
    }

    pub fn output(&self) -> PathBuf {
        self.root().join("output")
    }

    pub fn quicklook(&self) -> PathBuf {
        self.root().join("quicklook")
    }

    pub fn ruleset(&self) -> PathBuf {
        self.root().join("ruleset").join("ruleset.dcp")
    }

    /// Create an empty product file under the input directory.
    pub fn touch_product(&self, rel: &str) -> PathBuf {
        let path = self.input().join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("creating product dir");
        fs::write(&path, b"").expect("writing product");
        path
    }

    /// Touch every product referenced by `fc`.
    pub fn touch_products(&self, fc: &FeatureCollection) {
        for feature in &fc.features {
            if let Some(rel) = feature.data_path() {
                self.touch_product(rel);
            }
        }
    }

    pub fn config(&self) -> BlockConfig {
        BlockConfig {
            input_path: self.input(),
            output_path: self.output(),
            quicklook_path: self.quicklook(),
            ruleset_path: self.ruleset(),
            engine: DEFAULT_ENGINE.to_string(),
            dry_run: false,
        }
    }
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self::new()
    }
}
