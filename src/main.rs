// src/main.rs

use std::process::ExitCode;

use ecognition_block::{cli, logging, run};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("ecognition-block error: {err:?}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("processing failed with an error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
