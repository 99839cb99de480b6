// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::CommandLine;

/// Delay before the busy indicator appears for requests that don't spin
/// immediately.
pub const SPIN_DELAY: Duration = Duration::from_millis(750);

/// A command together with what the front end should show while it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub command: CommandLine,
    /// Title of the busy dialog
    pub title: String,
    /// Message shown next to the spinner
    pub progress_message: String,
    /// Show the busy indicator right away instead of after [`SPIN_DELAY`]
    pub spin_now: bool,
}

impl ProcessRequest {
    pub fn new(
        command: CommandLine,
        title: impl Into<String>,
        progress_message: impl Into<String>,
    ) -> Self {
        Self {
            command,
            title: title.into(),
            progress_message: progress_message.into(),
            spin_now: false,
        }
    }

    pub fn spin_now(mut self, spin_now: bool) -> Self {
        self.spin_now = spin_now;
        self
    }

    /// How long the front end waits before showing the busy indicator.
    pub fn spin_delay(&self) -> Duration {
        if self.spin_now {
            Duration::ZERO
        } else {
            SPIN_DELAY
        }
    }
}

/// Result of running one external command.
///
/// `success` is only true for a normal exit with status zero. `killed` is only
/// true when the process was terminated by a signal; a clean non-zero exit is
/// an ordinary failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub success: bool,
    /// Combined stdout and stderr
    pub output: String,
    pub killed: bool,
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
}

impl ProcessOutcome {
    pub fn exited(code: i32, output: impl Into<String>) -> Self {
        Self {
            success: code == 0,
            output: output.into(),
            killed: false,
            exit_code: Some(code),
            signal: None,
        }
    }

    pub fn signalled(signal: i32, output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
            killed: true,
            exit_code: None,
            signal: Some(signal),
        }
    }

    /// The process could not be started at all (missing executable, ...).
    pub fn spawn_failed(diagnostic: impl Into<String>) -> Self {
        Self {
            success: false,
            output: diagnostic.into(),
            killed: false,
            exit_code: None,
            signal: None,
        }
    }

    pub fn as_triple(&self) -> (bool, &str, bool) {
        (self.success, self.output.as_str(), self.killed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let outcome = ProcessOutcome::exited(0, "done");
        assert_eq!(outcome.as_triple(), (true, "done", false));
    }

    #[test]
    fn non_zero_exit_is_plain_failure() {
        let outcome = ProcessOutcome::exited(32, "wrong fs type");
        assert_eq!(outcome.as_triple(), (false, "wrong fs type", false));
        assert_eq!(outcome.exit_code, Some(32));
    }

    #[test]
    fn signal_is_killed() {
        let outcome = ProcessOutcome::signalled(9, "");
        assert!(outcome.killed);
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, None);
    }

    #[test]
    fn spawn_failure_is_not_killed() {
        let outcome = ProcessOutcome::spawn_failed("mount: No such file or directory");
        assert_eq!(
            outcome.as_triple(),
            (false, "mount: No such file or directory", false)
        );
    }

    #[test]
    fn spin_delay_follows_flag() {
        let request = ProcessRequest::new(CommandLine::new("umount"), "Unmount", "Unmounting...");
        assert_eq!(request.spin_delay(), SPIN_DELAY);
        assert_eq!(request.spin_now(true).spin_delay(), Duration::ZERO);
    }
}
