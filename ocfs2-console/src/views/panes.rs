// SPDX-License-Identifier: GPL-3.0-only

//! General, File Listing and Configured Nodes panes

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};
use cosmic::{Apply, Element};
use ocfs2_types::{ClusterNode, DirEntry, VolumeInfo, bytes_to_pretty, size_label};

use crate::app::Message;
use crate::controls::fields::{labelled_info, link_info};
use crate::fl;
use crate::ui::app::state::{AppModel, Load, PaneTab};

pub fn tabs<'a>(active: PaneTab) -> Element<'a, Message> {
    let tab = |tab: PaneTab, label: String| -> Element<'a, Message> {
        if tab == active {
            widget::button::suggested(label)
                .on_press(Message::SelectTab(tab))
                .into()
        } else {
            widget::button::text(label)
                .on_press(Message::SelectTab(tab))
                .into()
        }
    };

    widget::row::with_capacity(3)
        .push(tab(PaneTab::General, fl!("tab-general")))
        .push(tab(PaneTab::Files, fl!("tab-files")))
        .push(tab(PaneTab::Nodes, fl!("tab-nodes")))
        .spacing(4)
        .into()
}

pub fn pane<'a>(app: &AppModel) -> Element<'a, Message> {
    let content = match app.panes.tab {
        PaneTab::General => general(app),
        PaneTab::Files => files(app),
        PaneTab::Nodes => nodes(app),
    };

    widget::scrollable(content)
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}

fn notice<'a>(text: String) -> Element<'a, Message> {
    widget::text::caption(text)
        .apply(widget::container)
        .padding(8)
        .into()
}

fn general<'a>(app: &AppModel) -> Element<'a, Message> {
    match &app.panes.general {
        Load::Empty => notice(fl!("no-selection")),
        Load::Loading => notice(fl!("loading")),
        Load::Failed(e) => notice(e.clone()),
        Load::Loaded(info) => volume_details(info),
    }
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| fl!("not-available"))
}

fn volume_details<'a>(info: &VolumeInfo) -> Element<'a, Message> {
    let mut column = widget::column()
        .push(labelled_info(fl!("device"), info.device.clone()))
        .push(labelled_info(fl!("volume-label"), info.label.clone()))
        .push(labelled_info(fl!("uuid"), info.uuid.clone()))
        .push(labelled_info(
            fl!("block-size"),
            optional(info.block_size.map(size_label)),
        ))
        .push(labelled_info(
            fl!("cluster-size"),
            optional(info.cluster_size.map(size_label)),
        ))
        .push(labelled_info(
            fl!("node-slots"),
            optional(info.node_slots.map(|s| s.to_string())),
        ))
        .spacing(6);

    column = match &info.mountpoint {
        Some(mountpoint) => column.push(link_info(
            fl!("mountpoint"),
            mountpoint.clone(),
            Message::OpenPath(mountpoint.clone()),
        )),
        None => column.push(labelled_info(fl!("mountpoint"), fl!("not-mounted"))),
    };

    if let Some(space) = &info.space {
        column = column
            .push(labelled_info(fl!("space-total"), bytes_to_pretty(&space.total, true)))
            .push(labelled_info(
                fl!("space-used"),
                format!(
                    "{} ({}%)",
                    bytes_to_pretty(&space.used, false),
                    space.percent_used()
                ),
            ))
            .push(labelled_info(fl!("space-free"), bytes_to_pretty(&space.free, false)));
    }

    for (label, features) in [
        (fl!("features-compat"), &info.compat_features),
        (fl!("features-incompat"), &info.incompat_features),
        (fl!("features-ro-compat"), &info.ro_compat_features),
    ] {
        if !features.is_empty() {
            column = column.push(labelled_info(label, features.clone()));
        }
    }

    column.padding(8).into()
}

fn files<'a>(app: &AppModel) -> Element<'a, Message> {
    let Some(mountpoint) = app
        .ctx
        .state
        .selected_partition()
        .and_then(|p| p.mountpoint.clone())
    else {
        return notice(fl!("files-not-mounted"));
    };

    let at_root = app.panes.files_dir.as_os_str().is_empty();
    let location = if at_root {
        mountpoint
    } else {
        format!(
            "{}/{}",
            mountpoint.trim_end_matches('/'),
            app.panes.files_dir.display()
        )
    };

    let mut up = widget::button::icon(icon::from_name("go-up-symbolic").size(16));
    if !at_root {
        up = up.on_press(Message::ParentDirectory);
    }

    let header = widget::row::with_capacity(2)
        .push(up)
        .push(widget::text::heading(location))
        .spacing(8)
        .align_y(Alignment::Center);

    let body: Element<'a, Message> = match &app.panes.files {
        Load::Empty => notice(fl!("files-not-mounted")),
        Load::Loading => notice(fl!("loading")),
        Load::Failed(e) => notice(e.clone()),
        Load::Loaded(entries) if entries.is_empty() => notice(fl!("files-empty")),
        Load::Loaded(entries) => {
            let mut list = widget::column().spacing(2);
            for entry in entries {
                list = list.push(file_row(entry));
            }
            list.into()
        }
    };

    widget::column()
        .push(header)
        .push(body)
        .spacing(8)
        .padding(8)
        .into()
}

fn file_row<'a>(entry: &DirEntry) -> Element<'a, Message> {
    let icon_name = if entry.is_dir() {
        "folder-symbolic"
    } else {
        "text-x-generic-symbolic"
    };

    let modified = entry
        .modified
        .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    let size = if entry.is_dir() {
        String::new()
    } else {
        bytes_to_pretty(&entry.size, false)
    };

    let row = widget::row::with_capacity(4)
        .push(icon::from_name(icon_name).size(16).icon())
        .push(widget::text::body(entry.name.clone()).width(Length::FillPortion(4)))
        .push(widget::text::caption(size).width(Length::FillPortion(2)))
        .push(widget::text::caption(modified).width(Length::FillPortion(2)))
        .spacing(8)
        .align_y(Alignment::Center);

    if entry.is_dir() {
        widget::button::custom(row)
            .on_press(Message::OpenDirectory(entry.name.clone()))
            .width(Length::Fill)
            .into()
    } else {
        row.padding([4, 16]).into()
    }
}

fn nodes<'a>(app: &AppModel) -> Element<'a, Message> {
    if !app.tool_available(ocfs2_sys::commands::O2CB_CTL) {
        return notice(fl!("nodes-tool-missing"));
    }

    match &app.panes.nodes {
        Load::Empty | Load::Loading => notice(fl!("loading")),
        Load::Failed(e) => notice(e.clone()),
        Load::Loaded(nodes) if nodes.is_empty() => notice(fl!("no-nodes")),
        Load::Loaded(nodes) => node_table(nodes),
    }
}

fn node_table<'a>(nodes: &[ClusterNode]) -> Element<'a, Message> {
    let header = widget::row::with_capacity(5)
        .push(widget::text::heading(fl!("node-number")).width(Length::FillPortion(1)))
        .push(widget::text::heading(fl!("node-name")).width(Length::FillPortion(3)))
        .push(widget::text::heading(fl!("ip-address")).width(Length::FillPortion(3)))
        .push(widget::text::heading(fl!("ip-port")).width(Length::FillPortion(1)))
        .push(widget::text::heading(fl!("node-status")).width(Length::FillPortion(2)))
        .spacing(8);

    let mut column = widget::column().push(header).spacing(4).padding(8);

    for node in nodes {
        column = column.push(
            widget::row::with_capacity(5)
                .push(widget::text::body(node.number.to_string()).width(Length::FillPortion(1)))
                .push(widget::text::body(node.name.clone()).width(Length::FillPortion(3)))
                .push(widget::text::body(node.ip_address.clone()).width(Length::FillPortion(3)))
                .push(widget::text::body(node.ip_port.to_string()).width(Length::FillPortion(1)))
                .push(widget::text::body(node.status.clone()).width(Length::FillPortion(2)))
                .spacing(8),
        );
    }

    column.into()
}
