// SPDX-License-Identifier: GPL-3.0-only

use std::future::Future;

use crate::ui::app::message::{Message, ProcessKind};
use crate::ui::app::state::{AppModel, BusyIndicator, Load};
use crate::ui::dialogs::state::{NodesDialog, ShowDialog};
use crate::ui::error::{Failure, UiErrorContext, log_failure_and_show_dialog};
use cosmic::app::Task;
use ocfs2_ops::{ActionError, ActionOutcome};
use ocfs2_types::{OperationId, ProcessRequest};

/// Runs one mutating command in the background.
///
/// `request` only describes the command for the busy indicator and the
/// close-while-running log; `future` is the dispatcher that actually runs it.
pub(super) fn start<F>(
    app: &mut AppModel,
    request: ProcessRequest,
    kind: ProcessKind,
    future: F,
) -> Task<Message>
where
    F: Future<Output = Result<ActionOutcome, ActionError>> + Send + 'static,
{
    if app.is_busy() {
        tracing::warn!(command = %request.command, "another command is still running");
        return Task::none();
    }

    let delay = request.spin_delay();
    let title = request.title.clone();
    let message = request.progress_message.clone();
    let command = request.command.to_string();
    let id = app.ctx.state.begin(request);

    tracing::info!(operation = %id, %command, "starting command");

    app.busy = Some(BusyIndicator {
        id,
        title,
        message,
        command,
        visible: delay.is_zero(),
        pulse: 0.0,
    });

    let run = Task::perform(future, move |result| {
        Message::ProcessFinished {
            id,
            kind,
            result: result.map_err(Failure::from),
        }
        .into()
    });

    if delay.is_zero() {
        return run;
    }

    let show = Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            id
        },
        |id| Message::ShowBusy(id).into(),
    );

    Task::batch([run, show])
}

pub(super) fn show_busy(app: &mut AppModel, id: OperationId) {
    if let Some(busy) = app.busy.as_mut()
        && busy.id == id
    {
        busy.visible = true;
    }
}

pub(super) fn busy_tick(app: &mut AppModel) {
    if let Some(busy) = app.busy.as_mut().filter(|busy| busy.visible) {
        busy.advance();
    }
}

/// Reports the result and refreshes, whether the command succeeded or not.
pub(super) fn finished(
    app: &mut AppModel,
    id: OperationId,
    kind: ProcessKind,
    result: Result<ActionOutcome, Failure>,
) -> Task<Message> {
    let Some(op) = app.ctx.state.finish(id) else {
        tracing::debug!(operation = %id, "ignoring result of a stale operation");
        return Task::none();
    };

    if app.busy.as_ref().is_some_and(|busy| busy.id == id) {
        app.busy = None;
    }

    let mut tasks = Vec::new();

    match result {
        Ok(ActionOutcome::Skipped) => {}
        Ok(ActionOutcome::Completed(_)) => {
            tracing::info!(operation = %id, command = %op.request.command, "command completed");
            if let Some(dialog) = cluster_dialog(kind, app.dialog.as_mut()) {
                dialog.reset_on_reload = true;
            }
        }
        Ok(ActionOutcome::Checked(report)) => {
            tracing::info!(
                operation = %id,
                device = %report.device,
                exit_code = report.exit_code,
                "fsck finished"
            );
            app.dialog = Some(ShowDialog::FsckReport(report));
        }
        Err(failure) => {
            if let Some(dialog) = cluster_dialog(kind, app.dialog.as_mut()) {
                tracing::error!(text = %failure.text, command = %op.request.command, "cluster command failed");
                dialog.running = false;
                dialog.error = Some(failure.text);
            } else {
                let ctx = UiErrorContext {
                    operation: &op.request.title,
                    command: Some(op.request.command.to_string()),
                    device: op.request.command.arguments().last().map(String::as_str),
                };
                tasks.push(Task::done(log_failure_and_show_dialog(failure, ctx).into()));
            }
        }
    }

    app.panes.general = Load::Empty;
    tasks.push(super::refresh(app));
    if kind == ProcessKind::Cluster {
        tasks.push(super::panes::load_nodes(app));
    }

    Task::batch(tasks)
}

/// The open cluster dialog, if it is the one that should show this result.
///
/// Volume commands always report through the ordinary dialogs, even when the
/// cluster dialog was opened while they ran.
fn cluster_dialog(kind: ProcessKind, dialog: Option<&mut ShowDialog>) -> Option<&mut NodesDialog> {
    match (kind, dialog) {
        (ProcessKind::Cluster, Some(ShowDialog::Nodes(dialog))) => Some(dialog),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_results_go_to_the_open_cluster_dialog() {
        let mut dialog = ShowDialog::Nodes(NodesDialog::new(Vec::new()));
        assert!(cluster_dialog(ProcessKind::Cluster, Some(&mut dialog)).is_some());
    }

    #[test]
    fn volume_results_skip_the_cluster_dialog() {
        let mut dialog = ShowDialog::Nodes(NodesDialog::new(Vec::new()));
        assert!(cluster_dialog(ProcessKind::Volume, Some(&mut dialog)).is_none());
        assert!(cluster_dialog(ProcessKind::Cluster, None).is_none());
    }
}
