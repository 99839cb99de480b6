// SPDX-License-Identifier: GPL-3.0-only

use ocfs2_ops::{ActionError, Severity};

use crate::app::Message;
use crate::fl;
use crate::ui::dialogs::state::ShowDialog;

/// An [`ActionError`] reduced to what the UI needs, so it can travel in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub(crate) text: String,
    pub(crate) severity: Severity,
}

impl From<ActionError> for Failure {
    fn from(err: ActionError) -> Self {
        Self {
            text: err.to_string(),
            severity: err.severity(),
        }
    }
}

pub(crate) struct UiErrorContext<'a> {
    pub(crate) operation: &'a str,
    pub(crate) command: Option<String>,
    pub(crate) device: Option<&'a str>,
}

impl<'a> UiErrorContext<'a> {
    pub(crate) fn new(operation: &'a str) -> Self {
        Self {
            operation,
            command: None,
            device: None,
        }
    }
}

/// Logs the failure and builds the dialog that reports it.
pub(crate) fn log_failure_and_show_dialog(failure: Failure, ctx: UiErrorContext<'_>) -> Message {
    let title = match failure.severity {
        Severity::Error => {
            tracing::error!(
                text = %failure.text,
                operation = ctx.operation,
                command = ?ctx.command,
                device = ?ctx.device,
                "operation failed"
            );
            fl!("error")
        }
        Severity::Warning => {
            tracing::warn!(
                text = %failure.text,
                operation = ctx.operation,
                command = ?ctx.command,
                device = ?ctx.device,
                "tool died unexpectedly"
            );
            fl!("warning")
        }
    };

    Message::Dialog(Box::new(ShowDialog::Info {
        title,
        body: failure.text,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_dialog_text_and_severity() {
        let failure = Failure::from(ActionError::UnmountKilled {
            device: "/dev/sdb1".to_string(),
            mountpoint: "/mnt/ocfs2".to_string(),
        });
        assert_eq!(failure.severity, Severity::Warning);
        assert!(failure.text.contains("umount died unexpectedly"));
    }
}
