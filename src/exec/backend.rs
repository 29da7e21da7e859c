// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The orchestrator talks to an `ExecutorBackend` instead of spawning
//! processes itself. Production code uses [`ProcessExecutor`]; tests can
//! swap in a fake that records invocations and reports a canned outcome.

use std::future::Future;
use std::pin::Pin;

use crate::errors::ExecutionError;
use crate::exec::command::Invocation;
use crate::exec::runner::run_invocation;

/// Future returned by [`ExecutorBackend::execute`].
pub type ExecFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<(), ExecutionError>> + Send + 'a>>;

/// Trait abstracting how an engine invocation is executed.
pub trait ExecutorBackend: Send {
    /// Run `invocation` to completion.
    ///
    /// Success is judged by exit status alone.
    fn execute<'a>(&'a mut self, invocation: &'a Invocation) -> ExecFuture<'a>;
}

/// Executor that launches the engine as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for ProcessExecutor {
    fn execute<'a>(&'a mut self, invocation: &'a Invocation) -> ExecFuture<'a> {
        Box::pin(run_invocation(invocation))
    }
}
