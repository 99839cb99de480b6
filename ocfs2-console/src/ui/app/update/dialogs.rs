// SPDX-License-Identifier: GPL-3.0-only

use super::process::start;
use crate::ui::app::message::{Message, ProcessKind};
use crate::ui::app::state::AppModel;
use crate::ui::dialogs::message::{
    FormatDialogMessage, LabelDialogMessage, MountDialogMessage, NodeSlotsDialogMessage,
    NodesDialogMessage,
};
use crate::ui::dialogs::state::ShowDialog;
use cosmic::app::Task;
use ocfs2_ops::{cluster, format as mkfs, mount as mounting, tune};

pub(super) fn mount(app: &mut AppModel, msg: MountDialogMessage) -> Task<Message> {
    let Some(ShowDialog::Mount(state)) = app.dialog.as_mut() else {
        tracing::warn!("mount dialog message without an open mount dialog");
        return Task::none();
    };

    match msg {
        MountDialogMessage::MountpointUpdate(text) => state.mountpoint = text,
        MountDialogMessage::Confirm => {
            let selection = state.selection.clone();
            let input = state.mountpoint.clone();
            app.dialog = None;

            let Some(request) = mounting::prepare_mount(&selection, &input) else {
                tracing::debug!(device = %selection.device, "mount cancelled, no mountpoint");
                return Task::none();
            };

            let services = app.ctx.services.clone();
            return start(app, request, ProcessKind::Volume, async move {
                mounting::mount(&services, &selection, &input).await
            });
        }
        MountDialogMessage::Cancel => app.dialog = None,
    }

    Task::none()
}

pub(super) fn format(app: &mut AppModel, msg: FormatDialogMessage) -> Task<Message> {
    let Some(ShowDialog::Format(state)) = app.dialog.as_mut() else {
        tracing::warn!("format dialog message without an open format dialog");
        return Task::none();
    };

    match msg {
        FormatDialogMessage::LabelUpdate(text) => state.label = text,
        FormatDialogMessage::ClusterSizeUpdate(index) => state.cluster_size_index = index,
        FormatDialogMessage::BlockSizeUpdate(index) => state.block_size_index = index,
        FormatDialogMessage::SlotsUpdate(text) => state.slots_text = text,
        FormatDialogMessage::ForceUpdate(force) => state.force = force,
        FormatDialogMessage::Confirm => {
            let prepared = state
                .options()
                .map_err(|e| e.to_string())
                .and_then(|options| {
                    mkfs::prepare_format(&state.selection, &options)
                        .map(|request| (request, options))
                        .map_err(|e| e.to_string())
                });

            let (request, options) = match prepared {
                Ok(prepared) => prepared,
                Err(text) => {
                    state.error = Some(text);
                    return Task::none();
                }
            };

            let selection = state.selection.clone();
            app.dialog = None;

            let services = app.ctx.services.clone();
            return start(app, request, ProcessKind::Volume, async move {
                mkfs::format(&services, &selection, &options).await
            });
        }
        FormatDialogMessage::Cancel => app.dialog = None,
    }

    Task::none()
}

pub(super) fn relabel(app: &mut AppModel, msg: LabelDialogMessage) -> Task<Message> {
    let Some(ShowDialog::Relabel(state)) = app.dialog.as_mut() else {
        tracing::warn!("label dialog message without an open label dialog");
        return Task::none();
    };

    match msg {
        LabelDialogMessage::LabelUpdate(text) => state.label = text,
        LabelDialogMessage::Confirm => {
            let request = match tune::prepare_relabel(&state.selection, &state.label) {
                Ok(request) => request,
                Err(e) => {
                    state.error = Some(e.to_string());
                    return Task::none();
                }
            };

            let selection = state.selection.clone();
            let label = state.label.clone();
            app.dialog = None;

            let services = app.ctx.services.clone();
            return start(app, request, ProcessKind::Volume, async move {
                tune::relabel(&services, &selection, &label).await
            });
        }
        LabelDialogMessage::Cancel => app.dialog = None,
    }

    Task::none()
}

pub(super) fn node_slots(app: &mut AppModel, msg: NodeSlotsDialogMessage) -> Task<Message> {
    let Some(ShowDialog::NodeSlots(state)) = app.dialog.as_mut() else {
        tracing::warn!("node slots dialog message without an open node slots dialog");
        return Task::none();
    };

    match msg {
        NodeSlotsDialogMessage::SlotsUpdate(text) => state.slots_text = text,
        NodeSlotsDialogMessage::Confirm => {
            let prepared = state.slots().map_err(|e| e.to_string()).and_then(|slots| {
                tune::prepare_tune_nodes(&state.selection, slots, state.current)
                    .map(|request| (request, slots))
                    .map_err(|e| e.to_string())
            });

            let (request, slots) = match prepared {
                Ok(prepared) => prepared,
                Err(text) => {
                    state.error = Some(text);
                    return Task::none();
                }
            };

            let selection = state.selection.clone();
            let current = state.current;
            app.dialog = None;

            let services = app.ctx.services.clone();
            return start(app, request, ProcessKind::Volume, async move {
                tune::tune_nodes(&services, &selection, slots, current).await
            });
        }
        NodeSlotsDialogMessage::Cancel => app.dialog = None,
    }

    Task::none()
}

/// The cluster dialog stays open while o2cb_ctl runs and is refreshed from
/// the node listing afterwards.
pub(super) fn nodes(app: &mut AppModel, msg: NodesDialogMessage) -> Task<Message> {
    let busy = app.is_busy();
    let Some(ShowDialog::Nodes(state)) = app.dialog.as_mut() else {
        tracing::warn!("nodes dialog message without an open nodes dialog");
        return Task::none();
    };

    match msg {
        NodesDialogMessage::NameUpdate(text) => state.name = text,
        NodesDialogMessage::ClusterUpdate(text) => state.cluster = text,
        NodesDialogMessage::NumberUpdate(text) => state.number_text = text,
        NodesDialogMessage::IpAddressUpdate(text) => state.ip_address = text,
        NodesDialogMessage::IpPortUpdate(text) => state.ip_port_text = text,
        NodesDialogMessage::Add | NodesDialogMessage::Remove(_) if busy => {
            tracing::debug!("cluster change ignored while a command runs");
        }
        NodesDialogMessage::Add => {
            let prepared = state.draft().and_then(|draft| {
                cluster::prepare_add_node(&draft)
                    .map(|request| (request, draft))
                    .map_err(|e| e.to_string())
            });

            let (request, draft) = match prepared {
                Ok(prepared) => prepared,
                Err(text) => {
                    state.error = Some(text);
                    return Task::none();
                }
            };

            state.error = None;
            state.running = true;
            let existing = state.nodes.clone();

            let services = app.ctx.services.clone();
            return start(app, request, ProcessKind::Cluster, async move {
                cluster::add_node(&services, &draft, &existing).await
            });
        }
        NodesDialogMessage::Remove(name) => {
            let request = match cluster::prepare_remove_node(&name) {
                Ok(request) => request,
                Err(e) => {
                    state.error = Some(e.to_string());
                    return Task::none();
                }
            };

            state.error = None;
            state.running = true;

            let services = app.ctx.services.clone();
            return start(app, request, ProcessKind::Cluster, async move {
                cluster::remove_node(&services, &name).await
            });
        }
        NodesDialogMessage::Close => app.dialog = None,
    }

    Task::none()
}
