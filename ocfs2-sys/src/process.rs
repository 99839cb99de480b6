// SPDX-License-Identifier: GPL-3.0-only

//! External command execution
//!
//! The runner never fails: every problem, including a missing executable, is
//! reported through [`ProcessOutcome`] so callers can pick the right dialog.

use std::os::unix::process::ExitStatusExt;
use std::process::Stdio;

use async_trait::async_trait;
use nix::sys::signal::Signal;
use ocfs2_types::{CommandLine, ProcessOutcome, ProcessRequest};
use tokio::process::Command;

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, request: &ProcessRequest) -> ProcessOutcome;
}

/// Runs requests as real child processes.
///
/// Children are not killed when the awaiting future is dropped, so a mount or
/// mkfs in flight when the console exits runs to completion on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, request: &ProcessRequest) -> ProcessOutcome {
        run_command(&request.command).await
    }
}

pub async fn run_command(command: &CommandLine) -> ProcessOutcome {
    tracing::info!(%command, "running external command");

    let result = Command::new(command.program())
        .args(command.arguments())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(false)
        .output()
        .await;

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(%command, %e, "failed to start external command");
            return ProcessOutcome::spawn_failed(format!("{}: {e}", command.program()));
        }
    };

    let text = combine_output(&output.stdout, &output.stderr);

    let outcome = match (output.status.code(), output.status.signal()) {
        (Some(code), _) => ProcessOutcome::exited(code, text),
        (None, Some(signal)) => ProcessOutcome::signalled(signal, text),
        // Neither an exit code nor a signal; treat it as an abnormal end.
        (None, None) => ProcessOutcome::signalled(0, text),
    };

    if outcome.success {
        tracing::debug!(%command, "external command succeeded");
    } else if let Some(signal) = outcome.signal {
        tracing::warn!(
            %command,
            signal = %signal_name(signal),
            "external command was killed"
        );
    } else {
        tracing::warn!(
            %command,
            exit_code = ?outcome.exit_code,
            output = %outcome.output,
            "external command failed"
        );
    }

    outcome
}

/// stdout first, then stderr, without surrounding blank lines.
pub fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);

    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn signal_name(signal: i32) -> String {
    Signal::try_from(signal)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|_| format!("signal {signal}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> ProcessRequest {
        ProcessRequest::new(
            CommandLine::new("sh").arg("-c").arg(script),
            "Test",
            "Testing...",
        )
    }

    #[test]
    fn combines_streams_in_order() {
        assert_eq!(combine_output(b"out\n", b"err\n"), "out\nerr");
        assert_eq!(combine_output(b"", b"  only err \n"), "only err");
        assert_eq!(combine_output(b"", b""), "");
    }

    #[test]
    fn names_signals() {
        assert_eq!(signal_name(9), "SIGKILL");
        assert_eq!(signal_name(9999), "signal 9999");
    }

    #[tokio::test]
    async fn zero_exit_succeeds() {
        let outcome = SystemRunner.run(&sh("echo mounted")).await;
        assert!(outcome.success);
        assert!(!outcome.killed);
        assert_eq!(outcome.output, "mounted");
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[tokio::test]
    async fn non_zero_exit_is_failure_with_output() {
        let outcome = SystemRunner
            .run(&sh("echo partial; echo 'wrong fs type' 1>&2; exit 32"))
            .await;
        assert!(!outcome.success);
        assert!(!outcome.killed);
        assert_eq!(outcome.exit_code, Some(32));
        assert_eq!(outcome.output, "partial\nwrong fs type");
    }

    #[tokio::test]
    async fn signal_marks_killed() {
        let outcome = SystemRunner.run(&sh("kill -9 $$")).await;
        assert!(!outcome.success);
        assert!(outcome.killed);
        assert_eq!(outcome.signal, Some(9));
    }

    #[tokio::test]
    async fn missing_executable_is_reported_as_output() {
        let request = ProcessRequest::new(
            CommandLine::new("/nonexistent/mount.ocfs2-missing"),
            "Mount",
            "Mounting...",
        );
        let outcome = SystemRunner.run(&request).await;
        assert!(!outcome.success);
        assert!(!outcome.killed);
        assert!(outcome.output.contains("/nonexistent/mount.ocfs2-missing"));
    }
}
