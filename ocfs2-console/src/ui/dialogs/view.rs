// SPDX-License-Identifier: GPL-3.0-only

use crate::app::Message;
use crate::fl;
use crate::ui::dialogs::message::{
    FormatDialogMessage, LabelDialogMessage, MountDialogMessage, NodeSlotsDialogMessage,
    NodesDialogMessage,
};
use crate::ui::dialogs::state::{
    FormatDialog, LabelDialog, MountDialog, NodeSlotsDialog, NodesDialog,
};
use cosmic::{
    Element, iced_widget,
    iced::Length,
    widget::text::{caption, caption_heading},
    widget::{self, button, checkbox, dialog, dropdown, scrollable, text_input},
};
use ocfs2_types::{BLOCK_SIZES, CLUSTER_SIZES, FsckMode, FsckReport, size_label};
use std::borrow::Cow;

pub fn mount<'a>(state: MountDialog) -> Element<'a, Message> {
    let MountDialog {
        selection,
        mountpoint,
    } = state;

    let content = iced_widget::column![
        caption(fl!("mount-prompt", device = selection.device)),
        text_input(fl!("mountpoint"), mountpoint)
            .label(fl!("mountpoint"))
            .on_input(|t| MountDialogMessage::MountpointUpdate(t).into()),
    ]
    .spacing(12);

    dialog::dialog()
        .title(fl!("mount"))
        .control(content)
        .primary_action(button::suggested(fl!("mount")).on_press(MountDialogMessage::Confirm.into()))
        .secondary_action(
            button::standard(fl!("cancel")).on_press(MountDialogMessage::Cancel.into()),
        )
        .into()
}

fn size_options(sizes: &[u32]) -> Vec<String> {
    std::iter::once(fl!("size-auto"))
        .chain(sizes.iter().map(|s| size_label(*s)))
        .collect()
}

pub fn format<'a>(state: FormatDialog) -> Element<'a, Message> {
    let FormatDialog {
        selection,
        label,
        cluster_size_index,
        block_size_index,
        slots_text,
        force,
        error,
    } = state;

    let mut content = iced_widget::column![
        caption(fl!("format-warning", device = selection.device)),
        text_input(fl!("volume-label"), label)
            .label(fl!("volume-label"))
            .on_input(|t| FormatDialogMessage::LabelUpdate(t).into()),
        caption_heading(fl!("cluster-size")),
        dropdown(size_options(CLUSTER_SIZES), Some(cluster_size_index), |v| {
            FormatDialogMessage::ClusterSizeUpdate(v).into()
        }),
        caption_heading(fl!("block-size")),
        dropdown(size_options(BLOCK_SIZES), Some(block_size_index), |v| {
            FormatDialogMessage::BlockSizeUpdate(v).into()
        }),
        text_input(fl!("node-slots"), slots_text)
            .label(fl!("node-slots"))
            .on_input(|t| FormatDialogMessage::SlotsUpdate(t).into()),
        checkbox(fl!("force-overwrite"), force)
            .on_toggle(|v| FormatDialogMessage::ForceUpdate(v).into()),
    ]
    .spacing(12);

    if let Some(error) = error {
        content = content.push(caption(error));
    }

    dialog::dialog()
        .title(fl!("format"))
        .control(content)
        .primary_action(
            button::destructive(fl!("format")).on_press(FormatDialogMessage::Confirm.into()),
        )
        .secondary_action(
            button::standard(fl!("cancel")).on_press(FormatDialogMessage::Cancel.into()),
        )
        .into()
}

pub fn relabel<'a>(state: LabelDialog) -> Element<'a, Message> {
    let LabelDialog {
        selection: _,
        label,
        error,
    } = state;

    let mut content = iced_widget::column![
        text_input(fl!("volume-label"), label)
            .label(fl!("volume-label"))
            .on_input(|t| LabelDialogMessage::LabelUpdate(t).into()),
    ]
    .spacing(12);

    if let Some(error) = error {
        content = content.push(caption(error));
    }

    dialog::dialog()
        .title(fl!("change-label"))
        .control(content)
        .primary_action(button::standard(fl!("apply")).on_press(LabelDialogMessage::Confirm.into()))
        .secondary_action(
            button::standard(fl!("cancel")).on_press(LabelDialogMessage::Cancel.into()),
        )
        .into()
}

pub fn node_slots<'a>(state: NodeSlotsDialog) -> Element<'a, Message> {
    let NodeSlotsDialog {
        selection: _,
        current,
        slots_text,
        error,
    } = state;

    let mut content = iced_widget::column![].spacing(12);

    if let Some(current) = current {
        content = content.push(caption(fl!("node-slots-current", slots = current)));
    }

    content = content.push(
        text_input(fl!("node-slots"), slots_text)
            .label(fl!("node-slots"))
            .on_input(|t| NodeSlotsDialogMessage::SlotsUpdate(t).into()),
    );

    if let Some(error) = error {
        content = content.push(caption(error));
    }

    dialog::dialog()
        .title(fl!("edit-node-slots"))
        .control(content)
        .primary_action(
            button::standard(fl!("apply")).on_press(NodeSlotsDialogMessage::Confirm.into()),
        )
        .secondary_action(
            button::standard(fl!("cancel")).on_press(NodeSlotsDialogMessage::Cancel.into()),
        )
        .into()
}

pub fn nodes<'a>(state: NodesDialog) -> Element<'a, Message> {
    let NodesDialog {
        nodes,
        name,
        cluster,
        number_text,
        ip_address,
        ip_port_text,
        error,
        running,
        reset_on_reload: _,
    } = state;

    let mut list = widget::column().spacing(6);
    if nodes.is_empty() {
        list = list.push(caption(fl!("no-nodes")));
    }
    for node in nodes {
        let mut remove = widget::button::icon(widget::icon::from_name("list-remove-symbolic"));
        if !running {
            remove = remove.on_press(NodesDialogMessage::Remove(node.name.clone()).into());
        }

        list = list.push(
            iced_widget::row![
                widget::text(format!(
                    "{} ({}) {}:{}",
                    node.name, node.number, node.ip_address, node.ip_port
                ))
                .width(Length::Fill),
                caption(node.cluster),
                remove,
            ]
            .spacing(12),
        );
    }

    let mut name_input = text_input(fl!("node-name"), name).label(fl!("node-name"));
    let mut cluster_input = text_input(fl!("cluster-name"), cluster).label(fl!("cluster-name"));
    let mut number_input = text_input(fl!("node-number"), number_text).label(fl!("node-number"));
    let mut address_input = text_input(fl!("ip-address"), ip_address).label(fl!("ip-address"));
    let mut port_input = text_input(fl!("ip-port"), ip_port_text).label(fl!("ip-port"));

    if !running {
        name_input = name_input.on_input(|t| NodesDialogMessage::NameUpdate(t).into());
        cluster_input = cluster_input.on_input(|t| NodesDialogMessage::ClusterUpdate(t).into());
        number_input = number_input.on_input(|t| NodesDialogMessage::NumberUpdate(t).into());
        address_input = address_input.on_input(|t| NodesDialogMessage::IpAddressUpdate(t).into());
        port_input = port_input.on_input(|t| NodesDialogMessage::IpPortUpdate(t).into());
    }

    let mut content = iced_widget::column![
        caption_heading(fl!("configured-nodes")),
        scrollable(list).height(Length::Fixed(140.)),
        caption_heading(fl!("add-node")),
        name_input,
        cluster_input,
        number_input,
        address_input,
        port_input,
    ]
    .spacing(12);

    if let Some(error) = error {
        content = content.push(caption(error));
    }

    if running {
        content = content.push(caption(fl!("working")));
    }

    let mut add = button::standard(fl!("add-node"));
    if !running {
        add = add.on_press(NodesDialogMessage::Add.into());
    }

    dialog::dialog()
        .title(fl!("configure-nodes"))
        .control(content)
        .primary_action(add)
        .secondary_action(
            button::standard(fl!("close")).on_press(NodesDialogMessage::Close.into()),
        )
        .into()
}

pub fn fsck_report<'a>(report: FsckReport) -> Element<'a, Message> {
    let title = match report.mode {
        FsckMode::Check => fl!("check"),
        FsckMode::Repair => fl!("repair"),
    };

    let summary = if report.status.is_clean() {
        fl!("fsck-clean", device = report.device.clone())
    } else if report.status.errors_corrected {
        fl!("fsck-corrected", device = report.device.clone())
    } else {
        fl!("fsck-errors", device = report.device.clone())
    };

    let mut content = iced_widget::column![widget::text(summary)].spacing(12);

    if report.status.reboot_required {
        content = content.push(caption(fl!("fsck-reboot")));
    }

    if !report.output.is_empty() {
        content = content.push(
            scrollable(widget::text::monotext(report.output)).height(Length::Fixed(220.)),
        );
    }

    dialog::dialog()
        .title(title)
        .control(content)
        .primary_action(button::standard(fl!("ok")).on_press(Message::CloseDialog))
        .into()
}

pub fn confirmation<'a>(
    title: impl Into<Cow<'a, str>>,
    prompt: impl Into<Cow<'a, str>>,
    ok_message: Message,
    cancel_message: Option<Message>,
) -> Element<'a, Message> {
    let mut dialog = dialog::dialog()
        .title(title)
        .body(prompt)
        .primary_action(button::destructive(fl!("ok")).on_press(ok_message));

    if let Some(c) = cancel_message {
        dialog = dialog.secondary_action(button::standard(fl!("cancel")).on_press(c))
    };

    dialog.into()
}

pub fn info<'a>(
    title: impl Into<Cow<'a, str>>,
    body: impl Into<Cow<'a, str>>,
    ok_message: Message,
) -> Element<'a, Message> {
    dialog::dialog()
        .title(title)
        .body(body)
        .primary_action(button::standard(fl!("ok")).on_press(ok_message))
        .into()
}

/// Shown while a mutating command runs; it has no actions.
pub fn busy<'a>(
    title: String,
    message: String,
    command: String,
    fraction: f32,
) -> Element<'a, Message> {
    dialog::dialog()
        .title(title)
        .control(
            iced_widget::column![
                widget::text(message),
                caption(command),
                iced_widget::progress_bar(0.0..=1.0, fraction).width(Length::Fill),
            ]
            .spacing(12),
        )
        .into()
}
