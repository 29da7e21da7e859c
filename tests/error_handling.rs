// tests/error_handling.rs

mod common;
use crate::common::builders::{BlockLayout, FeatureBuilder, FeatureCollectionBuilder};
use crate::common::{FakeExecutor, init_tracing};

use std::collections::HashMap;
use std::fs;

use ecognition_block::config::{RawProcessParameters, TASK_PARAMETERS_ENV, load_params};
use ecognition_block::engine::{BatchRunner, process};
use ecognition_block::errors::{BlockError, ExecutionError};
use ecognition_block::exec::ProcessExecutor;
use ecognition_block::metadata::{FeatureCollection, load_metadata};

#[tokio::test]
async fn missing_input_parameter_is_named() {
    init_tracing();
    let raw = RawProcessParameters {
        output: Some("output".into()),
        ruleset_path: Some("ruleset".into()),
        ..RawProcessParameters::default()
    };

    let result = process(raw, &FeatureCollection::default(), FakeExecutor::new()).await;

    match result {
        Err(BlockError::MissingParameter(key)) => {
            assert_eq!(key, "input");
        }
        Err(e) => panic!("Expected MissingParameter, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    let err = BlockError::MissingParameter("input".to_string());
    assert_eq!(err.to_string(), "Missing parameter: input");
}

#[test]
fn malformed_metadata_returns_structured_error() {
    let layout = BlockLayout::new();
    let path = layout.input().join("data.json");
    fs::write(&path, r#"{"type": "FeatureCollection", "features": [}"#).unwrap();

    match load_metadata(&path) {
        Err(BlockError::MetadataParse { path: p, .. }) => assert_eq!(p, path),
        Err(e) => panic!("Expected MetadataParse error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_task_parameters_are_not_swallowed() {
    let mut env = HashMap::new();
    env.insert(TASK_PARAMETERS_ENV.to_string(), "{'single': 'quotes'}".to_string());

    match load_params(&env) {
        Err(BlockError::TaskParameters(_)) => {}
        other => panic!("Expected TaskParameters error, got: {:?}", other),
    }
}

#[tokio::test]
async fn missing_engine_executable_is_execution_error() {
    init_tracing();
    let layout = BlockLayout::new();
    let fc = FeatureCollectionBuilder::new()
        .with_feature(FeatureBuilder::new("abc/defg").build())
        .build();
    layout.touch_products(&fc);

    let mut runner = BatchRunner::new(
        layout.config().process_parameters(Default::default()),
        ProcessExecutor::new(),
    )
    .unwrap()
    .with_engine(layout.root().join("DIACmdEngine").display().to_string());

    match runner.process(&fc).await {
        Err(BlockError::Execution(err @ ExecutionError::Launch(_))) => {
            assert!(err
                .to_string()
                .starts_with("eCognition run failed with exception: "));
        }
        other => panic!("Expected launch failure, got: {:?}", other),
    }
}

#[tokio::test]
async fn missing_ruleset_stops_before_processing() {
    let layout = BlockLayout::new();
    fs::remove_file(layout.ruleset()).unwrap();

    let executor = FakeExecutor::new();
    let executed = executor.executed();
    let result = BatchRunner::new(layout.config().process_parameters(Default::default()), executor);

    assert!(matches!(result, Err(BlockError::NoRuleset(_))));
    assert!(executed.lock().unwrap().is_empty());
}
