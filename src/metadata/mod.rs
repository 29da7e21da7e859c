// src/metadata/mod.rs

//! GeoJSON metadata exchanged between blocks.
//!
//! - [`model`] holds the `Feature` / `FeatureCollection` data model.
//! - [`codec`] loads and saves collections and derives output features.

pub mod codec;
pub mod model;

pub use codec::{create_metadata_copy, load_metadata, save_metadata};
pub use model::{
    DATA_PATH_KEY, Feature, FeatureCollection, Properties, RESERVED_PREFIXES,
};
