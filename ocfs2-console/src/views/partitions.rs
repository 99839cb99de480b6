// SPDX-License-Identifier: GPL-3.0-only

//! The partition list

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};
use cosmic::{Apply, Element};
use ocfs2_types::{Partition, bytes_to_pretty};

use crate::app::Message;
use crate::fl;

const COLUMNS: [u16; 5] = [3, 4, 3, 2, 2];

fn cells<'a>(values: [String; 5], heading: bool) -> Element<'a, Message> {
    let mut row = widget::row::with_capacity(5)
        .spacing(8)
        .align_y(Alignment::Center);

    for (value, portion) in values.into_iter().zip(COLUMNS) {
        let cell: Element<'a, Message> = if heading {
            widget::text::heading(value).into()
        } else {
            widget::text::body(value).into()
        };
        row = row.push(widget::container(cell).width(Length::FillPortion(portion)));
    }

    row.into()
}

fn partition_row<'a>(partition: &Partition, selected: bool) -> Element<'a, Message> {
    let values = [
        partition.device.clone(),
        partition.mountpoint.clone().unwrap_or_default(),
        partition.label.clone().unwrap_or_default(),
        partition.fs_type.clone().unwrap_or_default(),
        bytes_to_pretty(&partition.size, false),
    ];

    let marker: Element<'a, Message> = if selected {
        icon::from_name("object-select-symbolic").size(16).icon().into()
    } else {
        widget::Space::new(16, 16).into()
    };

    widget::row::with_capacity(2)
        .push(marker)
        .push(cells(values, selected))
        .spacing(8)
        .align_y(Alignment::Center)
        .apply(widget::button::custom)
        .on_press(Message::SelectPartition(partition.device.clone()))
        .width(Length::Fill)
        .into()
}

pub fn partition_list<'a>(partitions: &[Partition], selected: Option<&str>) -> Element<'a, Message> {
    let header = widget::row::with_capacity(2)
        .push(widget::Space::new(16, 16))
        .push(cells(
            [
                fl!("column-device"),
                fl!("column-mountpoint"),
                fl!("column-label"),
                fl!("column-type"),
                fl!("column-size"),
            ],
            true,
        ))
        .spacing(8)
        .padding([0, 8]);

    if partitions.is_empty() {
        return widget::column()
            .push(header)
            .push(widget::text::caption(fl!("no-partitions")))
            .spacing(8)
            .into();
    }

    let mut rows = widget::column().spacing(2);
    for partition in partitions {
        rows = rows.push(partition_row(
            partition,
            selected == Some(partition.device.as_str()),
        ));
    }

    widget::column()
        .push(header)
        .push(widget::scrollable(rows).height(Length::Fill))
        .spacing(4)
        .into()
}
