// SPDX-License-Identifier: GPL-3.0-only

use ocfs2_sys::SysError;
use ocfs2_types::{FsckMode, FsckReport, ProcessOutcome, ValidationError};
use thiserror::Error;

const REBOOT_ADVICE: &str =
    "Your system is probably in an inconsistent state. You should reboot at the earliest opportunity";

fn fsck_verb(mode: &FsckMode) -> &'static str {
    match mode {
        FsckMode::Check => "check",
        FsckMode::Repair => "repair",
    }
}

fn fsck_progress(mode: &FsckMode) -> &'static str {
    match mode {
        FsckMode::Check => "checking",
        FsckMode::Repair => "repairing",
    }
}

/// Result of a dispatcher that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A required parameter was missing; nothing ran
    Skipped,
    /// The tool exited successfully
    Completed(ProcessOutcome),
    /// fsck.ocfs2 finished without uncorrected errors
    Checked(FsckReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The tool reported a failure
    Error,
    /// The tool died; the system may be inconsistent
    Warning,
}

/// Failures shown to the user. `Display` is the dialog text.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("{output}: Could not mount {device}")]
    MountFailed { device: String, output: String },

    #[error("mount died unexpectedly while mounting {device} on {mountpoint}! {}", REBOOT_ADVICE)]
    MountKilled { device: String, mountpoint: String },

    #[error("{output}: Could not unmount {mountpoint} mounted on {device}")]
    UnmountFailed {
        device: String,
        mountpoint: String,
        output: String,
    },

    #[error("umount died unexpectedly while unmounting {mountpoint} from {device}! {}", REBOOT_ADVICE)]
    UnmountKilled { device: String, mountpoint: String },

    #[error("{output}: Could not format {device}")]
    FormatFailed { device: String, output: String },

    #[error("mkfs.ocfs2 died unexpectedly while formatting {device}! {}", REBOOT_ADVICE)]
    FormatKilled { device: String },

    #[error("{output}: Could not change the label of {device}")]
    RelabelFailed { device: String, output: String },

    #[error("tunefs.ocfs2 died unexpectedly while relabeling {device}! {}", REBOOT_ADVICE)]
    RelabelKilled { device: String },

    #[error("{output}: Could not change the node slots of {device}")]
    TuneNodesFailed { device: String, output: String },

    #[error("tunefs.ocfs2 died unexpectedly while changing the node slots of {device}! {}", REBOOT_ADVICE)]
    TuneNodesKilled { device: String },

    #[error("{output}: Could not {} {device}", fsck_verb(.mode))]
    FsckFailed {
        device: String,
        mode: FsckMode,
        output: String,
    },

    #[error("fsck.ocfs2 died unexpectedly while {} {device}! {}", fsck_progress(.mode), REBOOT_ADVICE)]
    FsckKilled { device: String, mode: FsckMode },

    #[error("{output}: Could not {action}")]
    ClusterFailed { action: String, output: String },

    #[error("o2cb_ctl died unexpectedly while trying to {action}! {}", REBOOT_ADVICE)]
    ClusterKilled { action: String },

    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    #[error("No partition selected")]
    NoSelection,

    #[error("{device} is mounted on {mountpoint}. Unmount it first")]
    DeviceMounted { device: String, mountpoint: String },

    #[error("{0}")]
    Sys(#[from] SysError),
}

impl ActionError {
    pub fn severity(&self) -> Severity {
        if self.requires_reboot() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Only a killed tool leaves the system in an unknown state.
    pub fn requires_reboot(&self) -> bool {
        matches!(
            self,
            Self::MountKilled { .. }
                | Self::UnmountKilled { .. }
                | Self::FormatKilled { .. }
                | Self::RelabelKilled { .. }
                | Self::TuneNodesKilled { .. }
                | Self::FsckKilled { .. }
                | Self::ClusterKilled { .. }
        )
    }
}

/// Maps a finished run onto the two-tier failure taxonomy.
pub(crate) fn check_outcome(
    outcome: ProcessOutcome,
    failed: impl FnOnce(String) -> ActionError,
    killed: impl FnOnce() -> ActionError,
) -> Result<ActionOutcome, ActionError> {
    if outcome.killed {
        return Err(killed());
    }
    if !outcome.success {
        return Err(failed(outcome.output));
    }
    Ok(ActionOutcome::Completed(outcome))
}
