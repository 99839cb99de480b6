// SPDX-License-Identifier: GPL-3.0-only

//! Relabeling and node slot changes through tunefs.ocfs2

use ocfs2_sys::commands;
use ocfs2_types::{ProcessRequest, Selection, validate_label, validate_node_slots};

use crate::error::check_outcome;
use crate::format::ensure_unmounted;
use crate::{ActionError, ActionOutcome, Services};

pub fn prepare_relabel(selection: &Selection, label: &str) -> Result<ProcessRequest, ActionError> {
    ensure_unmounted(selection)?;
    let label = label.trim();
    validate_label(label)?;

    Ok(ProcessRequest::new(
        commands::tune_label(&selection.device, label),
        "Change Label",
        "Changing label...",
    ))
}

/// `current` is the slot count the volume has now, when known.
pub fn prepare_tune_nodes(
    selection: &Selection,
    slots: u16,
    current: Option<u16>,
) -> Result<ProcessRequest, ActionError> {
    ensure_unmounted(selection)?;
    validate_node_slots(slots, current)?;

    Ok(ProcessRequest::new(
        commands::tune_node_slots(&selection.device, slots),
        "Edit Node Slots",
        "Changing node slots...",
    )
    .spin_now(true))
}

pub async fn relabel(
    services: &Services,
    selection: &Selection,
    label: &str,
) -> Result<ActionOutcome, ActionError> {
    let request = prepare_relabel(selection, label)?;
    let outcome = services.runner.run(&request).await;

    check_outcome(
        outcome,
        |output| ActionError::RelabelFailed {
            device: selection.device.clone(),
            output,
        },
        || ActionError::RelabelKilled {
            device: selection.device.clone(),
        },
    )
}

pub async fn tune_nodes(
    services: &Services,
    selection: &Selection,
    slots: u16,
    current: Option<u16>,
) -> Result<ActionOutcome, ActionError> {
    let request = prepare_tune_nodes(selection, slots, current)?;
    let outcome = services.runner.run(&request).await;

    check_outcome(
        outcome,
        |output| ActionError::TuneNodesFailed {
            device: selection.device.clone(),
            output,
        },
        || ActionError::TuneNodesKilled {
            device: selection.device.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use ocfs2_types::{ProcessOutcome, ValidationError};

    use super::*;
    use crate::testing::services;

    fn selection() -> Selection {
        Selection {
            device: "/dev/sdb1".to_string(),
            mountpoint: None,
        }
    }

    #[tokio::test]
    async fn relabel_runs_tunefs() {
        let (services, runner, _source) = services();

        relabel(&services, &selection(), " data ").await.expect("relabeled");
        assert_eq!(
            runner.take_calls(),
            vec![vec!["tunefs.ocfs2", "-L", "data", "/dev/sdb1"]]
        );
    }

    #[tokio::test]
    async fn relabel_rejects_empty_label() {
        let (services, runner, _source) = services();

        let err = relabel(&services, &selection(), "  ").await.expect_err("empty");
        assert!(matches!(err, ActionError::InvalidInput(ValidationError::LabelEmpty)));
        assert!(runner.take_calls().is_empty());
    }

    #[tokio::test]
    async fn tune_nodes_runs_tunefs() {
        let (services, runner, _source) = services();

        tune_nodes(&services, &selection(), 8, Some(4)).await.expect("tuned");
        assert_eq!(
            runner.take_calls(),
            vec![vec!["tunefs.ocfs2", "-N", "8", "/dev/sdb1"]]
        );
    }

    #[tokio::test]
    async fn tune_nodes_cannot_shrink() {
        let (services, runner, _source) = services();

        let err = tune_nodes(&services, &selection(), 2, Some(4))
            .await
            .expect_err("shrink");
        assert!(matches!(
            err,
            ActionError::InvalidInput(ValidationError::NodeSlotsBelowCurrent { current: 4 })
        ));
        assert!(runner.take_calls().is_empty());
    }

    #[tokio::test]
    async fn tunefs_failure_text() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(1, "volume is in use"));

        let err = tune_nodes(&services, &selection(), 8, None)
            .await
            .expect_err("failed");
        assert_eq!(
            err.to_string(),
            "volume is in use: Could not change the node slots of /dev/sdb1"
        );
    }
}
