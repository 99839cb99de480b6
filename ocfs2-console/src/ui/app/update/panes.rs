// SPDX-License-Identifier: GPL-3.0-only

//! Loading the General, File Listing and Configured Nodes panes

use std::path::PathBuf;

use crate::ui::app::message::Message;
use crate::ui::app::state::{AppModel, Load};
use crate::ui::dialogs::state::ShowDialog;
use cosmic::app::Task;
use ocfs2_ops::{cluster, info};
use ocfs2_sys::commands::O2CB_CTL;
use ocfs2_types::{ClusterNode, DirEntry, VolumeInfo};

/// Reloads the General and File Listing panes for the selected partition.
pub(crate) fn load_panes(app: &mut AppModel) -> Task<Message> {
    let Some(partition) = app.ctx.state.selected_partition().cloned() else {
        app.panes.general = Load::Empty;
        app.panes.files = Load::Empty;
        return Task::none();
    };

    app.panes.general = Load::Loading;
    let services = app.ctx.services.clone();
    let device = partition.device.clone();
    let general = Task::perform(
        async move {
            info::load_general(&services, &partition)
                .await
                .map_err(|e| e.to_string())
        },
        move |result| {
            Message::GeneralLoaded {
                device: device.clone(),
                result,
            }
            .into()
        },
    );

    Task::batch([general, load_files(app)])
}

fn load_files(app: &mut AppModel) -> Task<Message> {
    let Some(mountpoint) = app
        .ctx
        .state
        .selected_partition()
        .and_then(|p| p.mountpoint.clone())
    else {
        app.panes.files = Load::Empty;
        return Task::none();
    };

    app.panes.files = Load::Loading;
    let relative = app.panes.files_dir.clone();

    Task::perform(
        {
            let mountpoint = mountpoint.clone();
            let relative = relative.clone();
            async move {
                info::list_files(&mountpoint, &relative)
                    .await
                    .map_err(|e| e.to_string())
            }
        },
        move |result| {
            Message::FilesLoaded {
                mountpoint: mountpoint.clone(),
                relative: relative.clone(),
                result,
            }
            .into()
        },
    )
}

/// Reloads the Configured Nodes pane (and an open cluster dialog).
pub(crate) fn load_nodes(app: &mut AppModel) -> Task<Message> {
    if !app.tool_available(O2CB_CTL) {
        app.panes.nodes = Load::Empty;
        return Task::none();
    }

    app.panes.nodes = Load::Loading;
    let services = app.ctx.services.clone();

    Task::perform(
        async move {
            cluster::list_nodes(&services)
                .await
                .map_err(|e| e.to_string())
        },
        |result| Message::NodesLoaded(result).into(),
    )
}

pub(super) fn general_loaded(app: &mut AppModel, device: String, result: Result<VolumeInfo, String>) {
    if app.ctx.state.selected.as_deref() != Some(device.as_str()) {
        return;
    }

    app.panes.general = match result {
        Ok(info) => Load::Loaded(info),
        Err(e) => {
            tracing::warn!(%e, %device, "failed to query volume");
            Load::Failed(e)
        }
    };
}

pub(super) fn files_loaded(
    app: &mut AppModel,
    mountpoint: String,
    relative: PathBuf,
    result: Result<Vec<DirEntry>, String>,
) {
    let current = app
        .ctx
        .state
        .selected_partition()
        .and_then(|p| p.mountpoint.as_deref());
    if current != Some(mountpoint.as_str()) || app.panes.files_dir != relative {
        return;
    }

    app.panes.files = match result {
        Ok(entries) => Load::Loaded(entries),
        Err(e) => {
            tracing::warn!(%e, %mountpoint, ?relative, "failed to list directory");
            Load::Failed(e)
        }
    };
}

pub(super) fn open_directory(app: &mut AppModel, name: &str) -> Task<Message> {
    app.panes.files_dir.push(name);
    load_files(app)
}

pub(super) fn parent_directory(app: &mut AppModel) -> Task<Message> {
    app.panes.files_dir = info::parent_dir(&app.panes.files_dir);
    load_files(app)
}

pub(super) fn nodes_loaded(app: &mut AppModel, result: Result<Vec<ClusterNode>, String>) {
    match result {
        Ok(nodes) => {
            if let Some(ShowDialog::Nodes(dialog)) = app.dialog.as_mut() {
                dialog.running = false;
                dialog.set_nodes(nodes.clone());
            }
            app.panes.nodes = Load::Loaded(nodes);
        }
        Err(e) => {
            tracing::warn!(%e, "failed to list cluster nodes");
            if let Some(ShowDialog::Nodes(dialog)) = app.dialog.as_mut() {
                dialog.running = false;
                dialog.error = Some(e.clone());
            }
            app.panes.nodes = Load::Failed(e);
        }
    }
}
