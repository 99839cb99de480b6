// SPDX-License-Identifier: GPL-3.0-only

use super::process::start;
use crate::ui::app::message::{Message, ProcessKind};
use crate::ui::app::state::{AppModel, ContextPage, Load};
use crate::ui::dialogs::state::{
    FormatDialog, LabelDialog, MountDialog, NodeSlotsDialog, NodesDialog, ShowDialog,
};
use crate::ui::error::{UiErrorContext, log_failure_and_show_dialog};
use cosmic::app::Task;
use ocfs2_ops::{ActionId, actions, fsck, mount};
use ocfs2_types::Selection;

/// Runs a menu or toolbar action if the current selection allows it.
pub(super) fn dispatch(app: &mut AppModel, id: ActionId) -> Task<Message> {
    if !actions::is_enabled(id, app.selection_state(), app.is_busy()) {
        tracing::debug!(?id, "ignoring disabled action");
        return Task::none();
    }

    let selection = app.ctx.state.selection();

    match (id, selection) {
        (ActionId::Refresh, _) => return super::refresh(app),
        (ActionId::ClusterConfig, _) => {
            let nodes = match &app.panes.nodes {
                Load::Loaded(nodes) => nodes.clone(),
                _ => Vec::new(),
            };
            app.dialog = Some(ShowDialog::Nodes(NodesDialog::new(nodes)));
            return super::panes::load_nodes(app);
        }
        (ActionId::Settings, _) => {
            return Task::done(Message::ToggleContextPage(ContextPage::Settings).into());
        }
        (ActionId::Quit, _) => {
            if let Some(op) = &app.ctx.state.in_flight {
                tracing::warn!(command = %op.request.command, "quitting while a command is still running");
            }
            return cosmic::iced::exit();
        }
        (ActionId::Mount, Some(selection)) => {
            app.dialog = Some(ShowDialog::Mount(MountDialog {
                selection,
                mountpoint: app.config.default_mountpoint.clone(),
            }));
        }
        (ActionId::Unmount, Some(selection)) => return run_unmount(app, selection),
        (ActionId::Format, Some(selection)) => {
            app.dialog = Some(ShowDialog::Format(FormatDialog::new(
                selection,
                app.config.default_node_slots,
                app.config.default_cluster_size,
                app.config.default_block_size,
            )));
        }
        (ActionId::Relabel, Some(selection)) => {
            let label = app
                .ctx
                .state
                .selected_partition()
                .and_then(|p| p.label.clone())
                .unwrap_or_default();
            app.dialog = Some(ShowDialog::Relabel(LabelDialog {
                selection,
                label,
                error: None,
            }));
        }
        (ActionId::NodeSlots, Some(selection)) => {
            let current = match &app.panes.general {
                Load::Loaded(info) if info.device == selection.device => info.node_slots,
                _ => None,
            };
            app.dialog = Some(ShowDialog::NodeSlots(NodeSlotsDialog {
                selection,
                current,
                slots_text: current.map(|s| s.to_string()).unwrap_or_default(),
                error: None,
            }));
        }
        (ActionId::Check, Some(selection)) => return run_fsck(app, selection, true),
        (ActionId::Repair, Some(selection)) => {
            app.dialog = Some(ShowDialog::ConfirmRepair { selection });
        }
        (id, None) => {
            tracing::debug!(?id, "action needs a selection");
        }
    }

    Task::none()
}

fn run_unmount(app: &mut AppModel, selection: Selection) -> Task<Message> {
    let Some(request) = mount::prepare_unmount(&selection) else {
        return Task::none();
    };

    let services = app.ctx.services.clone();
    start(app, request, ProcessKind::Volume, async move {
        mount::unmount(&services, &selection).await
    })
}

/// `check` runs read-only; otherwise the volume is repaired.
pub(super) fn run_fsck(app: &mut AppModel, selection: Selection, check: bool) -> Task<Message> {
    let request = match fsck::prepare_fsck(&selection, check) {
        Ok(request) => request,
        Err(e) => {
            let ctx = UiErrorContext {
                device: Some(&selection.device),
                ..UiErrorContext::new("fsck")
            };
            return Task::done(log_failure_and_show_dialog(e.into(), ctx).into());
        }
    };

    let services = app.ctx.services.clone();
    start(app, request, ProcessKind::Volume, async move {
        fsck::fsck(&services, &selection, check).await
    })
}
