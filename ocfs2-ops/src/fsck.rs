// SPDX-License-Identifier: GPL-3.0-only

//! Filesystem check and repair

use ocfs2_sys::commands;
use ocfs2_types::{FsckMode, FsckReport, FsckStatus, ProcessRequest, Selection};

use crate::format::ensure_unmounted;
use crate::{ActionError, ActionOutcome, Services};

/// `check` selects a read-only check; otherwise the volume is repaired.
pub fn prepare_fsck(selection: &Selection, check: bool) -> Result<ProcessRequest, ActionError> {
    ensure_unmounted(selection)?;

    let (title, progress) = match FsckMode::from_check_flag(check) {
        FsckMode::Check => ("Check", "Checking..."),
        FsckMode::Repair => ("Repair", "Repairing..."),
    };

    Ok(ProcessRequest::new(
        commands::fsck(&selection.device, FsckMode::from_check_flag(check)),
        title,
        progress,
    )
    .spin_now(true))
}

pub async fn fsck(
    services: &Services,
    selection: &Selection,
    check: bool,
) -> Result<ActionOutcome, ActionError> {
    let mode = FsckMode::from_check_flag(check);
    let request = prepare_fsck(selection, check)?;
    let outcome = services.runner.run(&request).await;

    if outcome.killed {
        return Err(ActionError::FsckKilled {
            device: selection.device.clone(),
            mode,
        });
    }

    let Some(exit_code) = outcome.exit_code else {
        return Err(ActionError::FsckFailed {
            device: selection.device.clone(),
            mode,
            output: outcome.output,
        });
    };

    let status = FsckStatus::from_exit_code(exit_code);
    if !status.is_success() {
        tracing::warn!(device = %selection.device, exit_code, ?status, "fsck.ocfs2 reported problems");
        return Err(ActionError::FsckFailed {
            device: selection.device.clone(),
            mode,
            output: outcome.output,
        });
    }

    Ok(ActionOutcome::Checked(FsckReport {
        device: selection.device.clone(),
        mode,
        status,
        exit_code,
        output: outcome.output,
    }))
}

#[cfg(test)]
mod tests {
    use ocfs2_types::ProcessOutcome;

    use super::*;
    use crate::testing::services;

    fn selection() -> Selection {
        Selection {
            device: "/dev/sdb1".to_string(),
            mountpoint: None,
        }
    }

    #[tokio::test]
    async fn check_is_read_only() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(0, "All passes succeeded."));

        let outcome = fsck(&services, &selection(), true).await.expect("checked");
        let ActionOutcome::Checked(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.mode, FsckMode::Check);
        assert!(report.status.is_clean());
        assert_eq!(report.output, "All passes succeeded.");
        assert_eq!(runner.take_calls(), vec![vec!["fsck.ocfs2", "-n", "/dev/sdb1"]]);
    }

    #[tokio::test]
    async fn repair_with_corrections_succeeds() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(1, "fixed 3 inodes"));

        let outcome = fsck(&services, &selection(), false).await.expect("repaired");
        let ActionOutcome::Checked(report) = outcome else {
            panic!("expected a report");
        };
        assert!(report.status.errors_corrected);
        assert_eq!(runner.take_calls(), vec![vec!["fsck.ocfs2", "-y", "/dev/sdb1"]]);
    }

    #[tokio::test]
    async fn uncorrected_errors_fail() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(4, "errors left"));
        runner.push_outcome(ProcessOutcome::exited(8, "cannot open"));

        let err = fsck(&services, &selection(), true).await.expect_err("bit 4");
        assert_eq!(err.to_string(), "errors left: Could not check /dev/sdb1");

        let err = fsck(&services, &selection(), false).await.expect_err("bit 8");
        assert_eq!(err.to_string(), "cannot open: Could not repair /dev/sdb1");
    }

    #[tokio::test]
    async fn killed_fsck() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::signalled(9, ""));

        let err = fsck(&services, &selection(), false).await.expect_err("killed");
        assert!(err.requires_reboot());
        assert!(
            err.to_string()
                .starts_with("fsck.ocfs2 died unexpectedly while repairing /dev/sdb1!")
        );

        runner.push_outcome(ProcessOutcome::signalled(9, ""));
        let err = fsck(&services, &selection(), true).await.expect_err("killed");
        assert!(err.to_string().contains("while checking /dev/sdb1!"));
    }

    #[tokio::test]
    async fn mounted_device_is_refused() {
        let (services, runner, _source) = services();
        let selection = Selection {
            device: "/dev/sdb1".to_string(),
            mountpoint: Some("/mnt/ocfs2".to_string()),
        };

        let err = fsck(&services, &selection, true).await.expect_err("mounted");
        assert!(matches!(err, ActionError::DeviceMounted { .. }));
        assert!(runner.take_calls().is_empty());
    }
}
