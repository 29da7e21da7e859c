// src/metadata/model.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Property holding a product's location relative to its base directory.
pub const DATA_PATH_KEY: &str = "up42.data_path";

/// Property namespaces owned by the platform / pipeline.
///
/// Keys with these prefixes are dropped when an output feature is derived.
pub const RESERVED_PREFIXES: [&str; 2] = ["up42.", "custom."];

/// Ordered property mapping of a feature.
pub type Properties = Map<String, Value>;

/// `"type": "Feature"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    #[default]
    Feature,
}

/// `"type": "FeatureCollection"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionKind {
    #[default]
    FeatureCollection,
}

/// A single GeoJSON feature describing one product.
///
/// `geometry` and `bbox` are never interpreted, only carried along. Members
/// this block does not know about end up in `foreign_members` so a document
/// survives a load/save cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub geometry: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Value>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Properties,

    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Option<Value>, bbox: Option<Value>, properties: Properties) -> Self {
        Self {
            geometry,
            bbox,
            properties,
            ..Self::default()
        }
    }

    /// Value of `up42.data_path`, if present and a string.
    pub fn data_path(&self) -> Option<&str> {
        self.properties.get(DATA_PATH_KEY).and_then(Value::as_str)
    }
}

/// Ordered collection of features; the unit exchanged between blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: CollectionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Value>,

    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// GeoJSON allows `"properties": null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}
