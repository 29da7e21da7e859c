#![allow(dead_code)]

pub use ecognition_block_test_utils::builders;
pub use ecognition_block_test_utils::fake_executor::FakeExecutor;
pub use ecognition_block_test_utils::init_tracing;

use std::path::PathBuf;

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
