// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    Element,
    cosmic_theme::Spacing,
    iced::{Alignment, Length},
    iced_widget,
    widget::{self, container},
};

pub fn labelled_info<'a, Message: 'static + Clone>(
    label: impl Into<String>,
    info: impl Into<String>,
) -> Element<'a, Message> {
    iced_widget::row![
        widget::text(label.into())
            .align_x(Alignment::End)
            .width(Length::FillPortion(1)),
        widget::text(info.into()).width(Length::FillPortion(3)),
    ]
    .spacing(Spacing::default().space_s)
    .into()
}

pub fn link_info<'a, Message: 'static + Clone>(
    label: impl Into<String>,
    info: impl Into<String>,
    message: Message,
) -> Element<'a, Message> {
    iced_widget::row![
        widget::text(label.into())
            .align_x(Alignment::End)
            .width(Length::FillPortion(1)),
        container(
            cosmic::widget::button::link(info.into())
                .width(Length::Shrink)
                .padding(0)
                .on_press(message)
        )
        .width(Length::FillPortion(3)),
    ]
    .spacing(Spacing::default().space_s)
    .into()
}
