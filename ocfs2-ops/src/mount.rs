// SPDX-License-Identifier: GPL-3.0-only

//! Mount and unmount dispatchers

use ocfs2_sys::commands;
use ocfs2_types::{ProcessRequest, Selection};

use crate::error::check_outcome;
use crate::{ActionError, ActionOutcome, Services};

/// Builds the mount request, or `None` when no mountpoint was entered.
pub fn prepare_mount(selection: &Selection, mountpoint_input: &str) -> Option<ProcessRequest> {
    if mountpoint_input.is_empty() {
        return None;
    }

    Some(ProcessRequest::new(
        commands::mount(&selection.device, mountpoint_input),
        "Mount",
        "Mounting...",
    ))
}

/// Builds the unmount request, or `None` when nothing is mounted.
pub fn prepare_unmount(selection: &Selection) -> Option<ProcessRequest> {
    let mountpoint = selection.mountpoint.as_deref()?;

    Some(ProcessRequest::new(
        commands::umount(mountpoint),
        "Unmount",
        "Unmounting...",
    ))
}

pub async fn mount(
    services: &Services,
    selection: &Selection,
    mountpoint_input: &str,
) -> Result<ActionOutcome, ActionError> {
    let Some(request) = prepare_mount(selection, mountpoint_input) else {
        tracing::debug!(device = %selection.device, "mount skipped, no mountpoint given");
        return Ok(ActionOutcome::Skipped);
    };

    let mountpoint = mountpoint_input.to_string();
    let outcome = services.runner.run(&request).await;

    check_outcome(
        outcome,
        |output| ActionError::MountFailed {
            device: selection.device.clone(),
            output,
        },
        || ActionError::MountKilled {
            device: selection.device.clone(),
            mountpoint,
        },
    )
}

pub async fn unmount(
    services: &Services,
    selection: &Selection,
) -> Result<ActionOutcome, ActionError> {
    let Some(request) = prepare_unmount(selection) else {
        tracing::debug!(device = %selection.device, "unmount skipped, not mounted");
        return Ok(ActionOutcome::Skipped);
    };

    let mountpoint = selection.mountpoint.clone().unwrap_or_default();
    let outcome = services.runner.run(&request).await;

    check_outcome(
        outcome,
        |output| ActionError::UnmountFailed {
            device: selection.device.clone(),
            mountpoint: mountpoint.clone(),
            output,
        },
        || ActionError::UnmountKilled {
            device: selection.device.clone(),
            mountpoint: mountpoint.clone(),
        },
    )
}
