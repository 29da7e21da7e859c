// src/exec/runner.rs

//! Engine process runner.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{info, warn};

use crate::errors::ExecutionError;
use crate::exec::command::Invocation;

/// Run `invocation` as a child process and wait for it to exit.
///
/// There is no timeout: a hanging engine hangs the block. The child's
/// stdout and stderr are forwarded line by line to the log.
pub async fn run_invocation(invocation: &Invocation) -> Result<(), ExecutionError> {
    info!(cmd = %invocation, "starting eCognition engine");

    let mut child = Command::new(invocation.program())
        .args(invocation.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(ExecutionError::Launch)?;

    let stdout = child.stdout.take().map(|s| tokio::spawn(forward_lines(s, false)));
    let stderr = child.stderr.take().map(|s| tokio::spawn(forward_lines(s, true)));

    let status = child.wait().await.map_err(ExecutionError::Launch)?;

    // Drain whatever output is left before reporting.
    for handle in [stdout, stderr].into_iter().flatten() {
        if let Err(e) = handle.await {
            warn!(error = %e, "engine output forwarder failed");
        }
    }

    let code = status.code().unwrap_or(-1);
    info!(
        exit_code = code,
        success = status.success(),
        "eCognition engine exited"
    );

    if status.success() {
        Ok(())
    } else {
        Err(ExecutionError::ExitCode(code))
    }
}

/// Log every output line of the engine until EOF.
///
/// The pipe is read to the end no matter what comes through it; closing it
/// early would kill the engine on its next write.
async fn forward_lines<R>(reader: R, is_stderr: bool)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                if is_stderr {
                    warn!(target: "ecognition::engine", "{line}");
                } else {
                    info!(target: "ecognition::engine", "{line}");
                }
            }
            Err(e) => {
                warn!(error = %e, "reading engine output failed; discarding the rest");
                if let Err(e) = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await {
                    warn!(error = %e, "discarding engine output failed");
                }
                break;
            }
        }
    }
}
