// src/engine/mod.rs

//! Batch orchestration for the block.
//!
//! [`batch`] walks the input feature collection one feature at a time:
//! resolve the product path, prepare the output directory, run the engine
//! through an `ExecutorBackend`, and derive the output feature. The first
//! failure ends the batch.

pub mod batch;

pub use batch::{BatchRunner, FeaturePlan, process};
