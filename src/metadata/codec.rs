// src/metadata/codec.rs

//! Reading, writing and deriving feature metadata.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::errors::{BlockError, Result};
use crate::metadata::model::{Feature, FeatureCollection, Properties, RESERVED_PREFIXES};

/// Load a feature collection from `path`.
///
/// A missing file is not an error: the previous block may simply not have
/// produced metadata, so an empty collection is returned instead.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<FeatureCollection> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no metadata file, using empty feature collection");
        return Ok(FeatureCollection::default());
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| BlockError::MetadataParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `collection` to `path` as indented GeoJSON, replacing any existing
/// file.
pub fn save_metadata(path: impl AsRef<Path>, collection: &FeatureCollection) -> Result<()> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    collection
        .serialize(&mut ser)
        .map_err(|e| BlockError::Other(e.into()))?;

    fs::write(path, buf)?;
    debug!(path = %path.display(), features = collection.len(), "metadata written");
    Ok(())
}

/// Derive an output feature from `feature`.
///
/// Geometry and bbox are copied as-is. Properties in a reserved namespace
/// (`up42.`, `custom.`) are dropped, then `overrides` are applied on top.
pub fn create_metadata_copy(feature: &Feature, overrides: Properties) -> Feature {
    let mut properties: Properties = feature
        .properties
        .iter()
        .filter(|(key, _)| !is_reserved(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    properties.extend(overrides);

    Feature::new(feature.geometry.clone(), feature.bbox.clone(), properties)
}

fn is_reserved(key: &str) -> bool {
    RESERVED_PREFIXES.iter().any(|prefix| key.starts_with(prefix))
}
