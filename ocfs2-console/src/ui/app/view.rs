// SPDX-License-Identifier: GPL-3.0-only

use super::message::Message;
use super::state::{AppModel, ContextPage};
use crate::controls::actions::{tool_button, toolbar_buttons};
use crate::fl;
use crate::ui::dialogs::state::ShowDialog;
use crate::ui::dialogs::view as dialogs;
use crate::views::settings::{settings, settings_footer};
use crate::views::{menu, panes, partitions};
use cosmic::app::context_drawer as cosmic_context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};
use cosmic::Element;

/// Elements to pack at the start of the header bar.
pub(crate) fn header_start(app: &AppModel) -> Vec<Element<'_, Message>> {
    menu::menu_view(
        &app.core,
        &app.key_binds,
        app.selection_state(),
        app.is_busy(),
    )
}

/// Elements to pack at the end of the header bar.
pub(crate) fn header_end(_app: &AppModel) -> Vec<Element<'_, Message>> {
    vec![
        widget::button::icon(icon::from_name("preferences-system-symbolic"))
            .on_press(Message::ToggleContextPage(ContextPage::Settings))
            .into(),
    ]
}

pub(crate) fn dialog(app: &AppModel) -> Option<Element<'_, Message>> {
    if let Some(busy) = app.busy.as_ref().filter(|busy| busy.visible) {
        return Some(dialogs::busy(
            busy.title.clone(),
            busy.message.clone(),
            busy.command.clone(),
            busy.fraction(),
        ));
    }

    match app.dialog.as_ref()? {
        ShowDialog::Mount(state) => Some(dialogs::mount(state.clone())),
        ShowDialog::Format(state) => Some(dialogs::format(state.clone())),
        ShowDialog::Relabel(state) => Some(dialogs::relabel(state.clone())),
        ShowDialog::NodeSlots(state) => Some(dialogs::node_slots(state.clone())),
        ShowDialog::Nodes(state) => Some(dialogs::nodes(state.clone())),
        ShowDialog::ConfirmRepair { selection } => Some(dialogs::confirmation(
            fl!("repair"),
            fl!("repair-confirmation", device = selection.device.clone()),
            Message::ConfirmRepair(selection.clone()),
            Some(Message::CloseDialog),
        )),
        ShowDialog::FsckReport(report) => Some(dialogs::fsck_report(report.clone())),
        ShowDialog::Info { title, body } => {
            Some(dialogs::info(title, body, Message::CloseDialog))
        }
    }
}

/// Display a context drawer if the context page is requested.
pub(crate) fn context_drawer(
    app: &AppModel,
) -> Option<cosmic_context_drawer::ContextDrawer<'_, Message>> {
    if !app.core.window.show_context {
        return None;
    }

    Some(match app.context_page {
        ContextPage::Settings => cosmic_context_drawer::context_drawer(
            settings(&app.config),
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
        .footer(settings_footer(&app.tools)),
    })
}

fn toolbar(app: &AppModel) -> Element<'_, Message> {
    let selection = app.selection_state();
    let busy = app.is_busy();

    let filter = widget::text_input(fl!("filter-placeholder"), app.filter_input.as_str())
        .on_input(Message::FilterInput)
        .on_submit(|_| Message::FilterSubmit)
        .width(Length::Fill);

    widget::row::with_capacity(3)
        .push(toolbar_buttons(selection, busy))
        .push(filter)
        .push(tool_button(
            "edit-find-symbolic",
            fl!("filter-apply"),
            Some(Message::FilterSubmit),
        ))
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

/// Describes the interface based on the current state of the application model.
pub(crate) fn view(app: &AppModel) -> Element<'_, Message> {
    let list = widget::container(partitions::partition_list(
        &app.ctx.state.partitions,
        app.ctx.state.selected.as_deref(),
    ))
    .height(Length::FillPortion(2))
    .width(Length::Fill);

    let details = widget::column()
        .push(panes::tabs(app.panes.tab))
        .push(panes::pane(app))
        .spacing(8)
        .height(Length::FillPortion(3))
        .width(Length::Fill);

    widget::column()
        .push(toolbar(app))
        .push(list)
        .push(widget::divider::horizontal::default())
        .push(details)
        .spacing(8)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
