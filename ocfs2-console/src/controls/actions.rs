// SPDX-License-Identifier: GPL-3.0-only

use cosmic::Element;
use cosmic::iced::Alignment;
use cosmic::widget::{self, icon};
use ocfs2_ops::actions;
use ocfs2_types::MountState;

use crate::app::Message;
use crate::i18n;

/// Toolbar entries of the action table, disabled where the selection or a
/// running command forbids them.
pub(crate) fn toolbar_buttons<'a>(selection: Option<MountState>, busy: bool) -> Element<'a, Message> {
    let buttons = actions::toolbar_actions()
        .map(|entry| {
            tool_button(
                entry.icon,
                i18n::text(entry.label_key),
                entry
                    .is_enabled(selection, busy)
                    .then_some(Message::Action(entry.id)),
            )
        })
        .collect();

    widget::Row::from_vec(buttons)
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
}

/// Icon button with a tooltip; `None` renders it disabled.
pub(crate) fn tool_button<'a>(
    icon_name: &'static str,
    label: String,
    message: Option<Message>,
) -> Element<'a, Message> {
    let mut button = widget::button::icon(icon::from_name(icon_name).size(16));
    if let Some(message) = message {
        button = button.on_press(message);
    }

    widget::tooltip(button, widget::text(label), widget::tooltip::Position::Bottom).into()
}
