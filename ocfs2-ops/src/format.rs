// SPDX-License-Identifier: GPL-3.0-only

//! Formatting a device as OCFS2

use ocfs2_sys::commands;
use ocfs2_types::{FormatOptions, ProcessRequest, Selection};

use crate::error::check_outcome;
use crate::{ActionError, ActionOutcome, Services};

/// Mounted devices are never formatted.
pub(crate) fn ensure_unmounted(selection: &Selection) -> Result<(), ActionError> {
    match &selection.mountpoint {
        Some(mountpoint) => Err(ActionError::DeviceMounted {
            device: selection.device.clone(),
            mountpoint: mountpoint.clone(),
        }),
        None => Ok(()),
    }
}

pub fn prepare_format(
    selection: &Selection,
    options: &FormatOptions,
) -> Result<ProcessRequest, ActionError> {
    ensure_unmounted(selection)?;
    options.validate()?;

    Ok(
        ProcessRequest::new(commands::mkfs(&selection.device, options), "Format", "Formatting...")
            .spin_now(true),
    )
}

pub async fn format(
    services: &Services,
    selection: &Selection,
    options: &FormatOptions,
) -> Result<ActionOutcome, ActionError> {
    let request = prepare_format(selection, options)?;
    let outcome = services.runner.run(&request).await;

    check_outcome(
        outcome,
        |output| ActionError::FormatFailed {
            device: selection.device.clone(),
            output,
        },
        || ActionError::FormatKilled {
            device: selection.device.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use ocfs2_types::{ProcessOutcome, ValidationError};

    use super::*;
    use crate::testing::services;

    fn selection(mountpoint: Option<&str>) -> Selection {
        Selection {
            device: "/dev/sdc1".to_string(),
            mountpoint: mountpoint.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn formats_with_options() {
        let (services, runner, _source) = services();
        let options = FormatOptions {
            label: "shared".to_string(),
            node_slots: 2,
            ..Default::default()
        };

        format(&services, &selection(None), &options)
            .await
            .expect("formatted");
        assert_eq!(
            runner.take_calls(),
            vec![vec!["mkfs.ocfs2", "-x", "-N", "2", "-L", "shared", "/dev/sdc1"]]
        );
    }

    #[tokio::test]
    async fn refuses_mounted_device() {
        let (services, runner, _source) = services();

        let err = format(&services, &selection(Some("/mnt/x")), &FormatOptions::default())
            .await
            .expect_err("mounted");
        assert!(matches!(err, ActionError::DeviceMounted { .. }));
        assert!(runner.take_calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_options_never_run() {
        let (services, runner, _source) = services();
        let options = FormatOptions {
            node_slots: 0,
            ..Default::default()
        };

        let err = format(&services, &selection(None), &options)
            .await
            .expect_err("invalid");
        assert!(matches!(
            err,
            ActionError::InvalidInput(ValidationError::NodeSlotsOutOfRange)
        ));
        assert!(runner.take_calls().is_empty());
    }

    #[tokio::test]
    async fn mkfs_failure_and_kill() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(1, "device is busy"));
        runner.push_outcome(ProcessOutcome::signalled(15, ""));

        let err = format(&services, &selection(None), &FormatOptions::default())
            .await
            .expect_err("failed");
        assert_eq!(err.to_string(), "device is busy: Could not format /dev/sdc1");

        let err = format(&services, &selection(None), &FormatOptions::default())
            .await
            .expect_err("killed");
        assert!(err.requires_reboot());
        assert!(err.to_string().contains("mkfs.ocfs2 died unexpectedly"));
    }
}
