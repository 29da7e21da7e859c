use std::sync::{Arc, Mutex};

use ecognition_block::errors::ExecutionError;
use ecognition_block::exec::{ExecFuture, ExecutorBackend, Invocation};

/// A fake executor that:
/// - records every invocation it is asked to run
/// - reports success, or a fixed exit code from the n-th call onwards.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<Invocation>>>,
    fail_from: Option<(usize, i32)>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with `code` starting at call number `call` (0-based).
    pub fn failing_from(call: usize, code: i32) -> Self {
        Self {
            fail_from: Some((call, code)),
            ..Self::default()
        }
    }

    /// Shared handle to the recorded invocations.
    pub fn executed(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.executed)
    }
}

impl ExecutorBackend for FakeExecutor {
    fn execute<'a>(&'a mut self, invocation: &'a Invocation) -> ExecFuture<'a> {
        let call = {
            let mut guard = self.executed.lock().unwrap();
            guard.push(invocation.clone());
            guard.len() - 1
        };
        let outcome = match self.fail_from {
            Some((from, code)) if call >= from => Err(ExecutionError::ExitCode(code)),
            _ => Ok(()),
        };

        Box::pin(async move { outcome })
    }
}
