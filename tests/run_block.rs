// tests/run_block.rs

mod common;
use crate::common::builders::{BlockLayout, FeatureBuilder, FeatureCollectionBuilder};
use crate::common::{FakeExecutor, fixture, init_tracing};

use std::error::Error;
use std::fs;

use serde_json::json;

use ecognition_block::config::{BlockConfig, BlockParameters};
use ecognition_block::metadata::{DATA_PATH_KEY, load_metadata, save_metadata};
use ecognition_block::run_block;

type TestResult = Result<(), Box<dyn Error>>;

const PRODUCT_DIR: &str = "3159422e-6c53-4d97-9186-f52626f56b00";

#[tokio::test]
async fn fixture_metadata_runs_end_to_end() -> TestResult {
    init_tracing();
    let layout = BlockLayout::new();
    fs::copy(fixture("data.json"), layout.input().join("data.json"))?;
    let input_fc = load_metadata(layout.input().join("data.json"))?;
    layout.touch_products(&input_fc);

    let executor = FakeExecutor::new();
    let executed = executor.executed();
    run_block(&layout.config(), BlockParameters::new(), executor).await?;

    let out_dir = layout.output().join(PRODUCT_DIR);
    assert!(out_dir.is_dir());
    assert!(layout.quicklook().is_dir());
    assert!(layout.output().join("data.json").is_file());

    let output_fc = load_metadata(layout.output().join("data.json"))?;
    assert_eq!(output_fc.len(), 1);
    let out = &output_fc.features[0];
    assert_eq!(out.data_path(), input_fc.features[0].data_path());
    assert_eq!(out.geometry, input_fc.features[0].geometry);
    assert_eq!(out.bbox, input_fc.features[0].bbox);
    assert!(!out.properties.contains_key("up42.previous_block"));
    assert!(!out.properties.contains_key("custom.order_id"));
    assert_eq!(out.properties.get("cloudCoverage"), Some(&json!(0.0)));

    let executed = executed.lock().unwrap();
    assert_eq!(executed.len(), 1);
    assert_eq!(executed[0].program(), "./DIACmdEngine");
    assert_eq!(
        executed[0].argv()[2],
        format!("ruleset={}", layout.ruleset().display())
    );

    Ok(())
}

#[tokio::test]
async fn block_parameters_reach_the_engine() -> TestResult {
    init_tracing();
    let layout = BlockLayout::new();
    let fc = FeatureCollectionBuilder::new()
        .with_feature(FeatureBuilder::new("a/one.tif").build())
        .with_feature(FeatureBuilder::new("b/two.tif").build())
        .build();
    layout.touch_products(&fc);
    save_metadata(layout.input().join("data.json"), &fc)?;

    let params = match json!({"threshold": 0.4, "class": "forest"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    let executor = FakeExecutor::new();
    let executed = executor.executed();
    run_block(&layout.config(), params, executor).await?;

    let executed = executed.lock().unwrap();
    assert_eq!(executed.len(), 2);
    for invocation in executed.iter() {
        assert_eq!(
            &invocation.argv()[4..],
            ["param:threshold=0.4", "param:class=forest"]
        );
    }

    let output_fc = load_metadata(layout.output().join("data.json"))?;
    let paths: Vec<_> = output_fc
        .features
        .iter()
        .map(|f| f.properties[DATA_PATH_KEY].clone())
        .collect();
    assert_eq!(paths, vec![json!("a/one.tif"), json!("b/two.tif")]);

    Ok(())
}

#[tokio::test]
async fn no_input_metadata_writes_empty_collection() -> TestResult {
    let layout = BlockLayout::new();

    let executor = FakeExecutor::new();
    let executed = executor.executed();
    run_block(&layout.config(), BlockParameters::new(), executor).await?;

    let output_fc = load_metadata(layout.output().join("data.json"))?;
    assert!(output_fc.is_empty());
    assert!(executed.lock().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn engine_failure_writes_no_metadata() -> TestResult {
    let layout = BlockLayout::new();
    let fc = FeatureCollectionBuilder::new()
        .with_feature(FeatureBuilder::new("a.tif").build())
        .with_feature(FeatureBuilder::new("b.tif").build())
        .build();
    layout.touch_products(&fc);
    save_metadata(layout.input().join("data.json"), &fc)?;

    let executor = FakeExecutor::failing_from(1, 7);
    let executed = executor.executed();
    let err = run_block(&layout.config(), BlockParameters::new(), executor)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("error code 7"), "got: {err}");
    assert_eq!(executed.lock().unwrap().len(), 2);
    assert!(!layout.output().join("data.json").exists());

    Ok(())
}

#[tokio::test]
async fn dry_run_executes_nothing() -> TestResult {
    let layout = BlockLayout::new();
    let fc = FeatureCollectionBuilder::new()
        .with_feature(FeatureBuilder::new("x/scene.tif").build())
        .build();
    layout.touch_products(&fc);
    save_metadata(layout.input().join("data.json"), &fc)?;

    let config = BlockConfig {
        dry_run: true,
        ..layout.config()
    };
    let executor = FakeExecutor::new();
    let executed = executor.executed();
    run_block(&config, BlockParameters::new(), executor).await?;

    assert!(executed.lock().unwrap().is_empty());
    assert!(!layout.output().exists());

    Ok(())
}
