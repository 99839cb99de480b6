// SPDX-License-Identifier: GPL-3.0-only

mod actions;
mod dialogs;
pub(crate) mod panes;
mod process;

use super::message::Message;
use super::state::{AppModel, Load};
use crate::config::LoggingLevel;
use crate::logging;
use cosmic::app::Task;
use ocfs2_ops::scan;
use std::path::PathBuf;

/// Handles messages emitted by the application and its widgets.
pub(crate) fn update(app: &mut AppModel, message: Message) -> Task<Message> {
    match message {
        Message::OpenPath(path) => {
            if let Err(err) = open::that_detached(&path) {
                tracing::warn!(?path, %err, "failed to open path");
            }
        }
        Message::ToggleContextPage(context_page) => {
            if app.context_page == context_page {
                // Close the context drawer if the toggled context page is the same.
                app.core.window.show_context = !app.core.window.show_context;
            } else {
                // Open the context drawer to display the requested context page.
                app.context_page = context_page;
                app.core.window.show_context = true;
            }
        }
        Message::UpdateConfig(config) => {
            if config.log_level != app.config.log_level {
                logging::set_log_level(config.log_level);
            }
            if config.log_to_disk != app.config.log_to_disk {
                logging::set_log_to_disk(config.log_to_disk);
            }
            app.config = config;
        }
        Message::Surface(action) => {
            return cosmic::task::message(cosmic::Action::Cosmic(
                cosmic::app::Action::Surface(action),
            ));
        }
        Message::Action(id) => return actions::dispatch(app, id),

        Message::FilterInput(text) => {
            app.filter_input = text;
        }
        Message::FilterSubmit => {
            app.ctx.state.filter = app.filter_input.trim().to_string();
            if app.config.last_filter != app.ctx.state.filter {
                app.config.last_filter = app.ctx.state.filter.clone();
                app.config.persist(super::APP_ID);
            }
            return refresh(app);
        }
        Message::Refreshed(result) => return refreshed(app, result),
        Message::SelectPartition(device) => {
            if app.ctx.state.selected.as_deref() == Some(device.as_str()) {
                return Task::none();
            }
            app.ctx.state.select(&device);
            app.panes.files_dir = PathBuf::new();
            let title = app.update_title();
            return title.chain(panes::load_panes(app));
        }
        Message::SelectTab(tab) => {
            app.panes.tab = tab;
        }

        Message::GeneralLoaded { device, result } => {
            panes::general_loaded(app, device, result);
        }
        Message::FilesLoaded {
            mountpoint,
            relative,
            result,
        } => panes::files_loaded(app, mountpoint, relative, result),
        Message::OpenDirectory(name) => return panes::open_directory(app, &name),
        Message::ParentDirectory => return panes::parent_directory(app),
        Message::NodesLoaded(result) => panes::nodes_loaded(app, result),

        Message::Dialog(dialog) => {
            app.dialog = Some(*dialog);
        }
        Message::CloseDialog => {
            app.dialog = None;
        }
        Message::MountDialog(msg) => return dialogs::mount(app, msg),
        Message::FormatDialog(msg) => return dialogs::format(app, msg),
        Message::LabelDialog(msg) => return dialogs::relabel(app, msg),
        Message::NodeSlotsDialog(msg) => return dialogs::node_slots(app, msg),
        Message::NodesDialog(msg) => return dialogs::nodes(app, msg),
        Message::ConfirmRepair(selection) => {
            app.dialog = None;
            return actions::run_fsck(app, selection, false);
        }

        Message::ShowBusy(id) => process::show_busy(app, id),
        Message::BusyTick => process::busy_tick(app),
        Message::ProcessFinished { id, kind, result } => {
            return process::finished(app, id, kind, result);
        }

        Message::LogLevelChanged(index) => {
            let level = LoggingLevel::from_index(index);
            app.config.log_level = level;
            logging::set_log_level(level);
            app.config.persist(super::APP_ID);
        }
        Message::ToggleLogToDisk(enabled) => {
            app.config.log_to_disk = enabled;
            logging::set_log_to_disk(enabled);
            app.config.persist(super::APP_ID);
        }
        Message::DefaultMountpointChanged(mountpoint) => {
            app.config.default_mountpoint = mountpoint;
            app.config.persist(super::APP_ID);
        }
    }

    Task::none()
}

/// Re-enumerates partitions with the current filter.
pub(crate) fn refresh(app: &mut AppModel) -> Task<Message> {
    let services = app.ctx.services.clone();
    let filter = app.ctx.state.filter.clone();

    Task::perform(
        async move { scan(services, filter).await.map_err(|e| e.to_string()) },
        |result| Message::Refreshed(result).into(),
    )
}

fn refreshed(
    app: &mut AppModel,
    result: Result<Vec<ocfs2_types::Partition>, String>,
) -> Task<Message> {
    match result {
        Ok(partitions) => {
            tracing::debug!(count = partitions.len(), "partition list refreshed");
            let previous = app.ctx.state.selected_partition().cloned();
            app.ctx.state.apply_scan(partitions);

            // Pane data only goes stale when the selected row changed or a
            // command cleared it.
            if app.ctx.state.selected_partition() == previous.as_ref()
                && !matches!(app.panes.general, Load::Empty)
            {
                return Task::none();
            }
            if app.ctx.state.selected.is_none() {
                app.panes.files_dir = PathBuf::new();
            }
            let title = app.update_title();
            title.chain(panes::load_panes(app))
        }
        Err(e) => {
            tracing::error!(%e, "failed to enumerate partitions");
            Task::none()
        }
    }
}
