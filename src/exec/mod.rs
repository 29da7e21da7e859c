// src/exec/mod.rs

//! Engine execution layer.
//!
//! - [`command`] builds the engine command line (`Invocation`).
//! - [`runner`] launches one invocation with `tokio::process::Command` and
//!   turns its exit status into a `Result`.
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `ProcessExecutor`; tests replace it with a fake.

pub mod backend;
pub mod command;
pub mod runner;

pub use backend::{ExecFuture, ExecutorBackend, ProcessExecutor};
pub use command::{Invocation, build_cmd_with_engine, build_ecognition_cmd};
pub use runner::run_invocation;
