// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::app::Message;
use crate::fl;
use crate::i18n;
use cosmic::Core;
use cosmic::widget::Id;
use cosmic::{Element, widget::menu};
use ocfs2_ops::actions::{self, ActionId, MenuGroup};
use ocfs2_types::MountState;

static MENU_ID: LazyLock<Id> = LazyLock::new(|| Id::new("menu_id"));

fn group_items(
    group: MenuGroup,
    selection: Option<MountState>,
    busy: bool,
) -> Vec<menu::Item<MenuAction, String>> {
    actions::menu_actions(group)
        .map(|entry| {
            let label = i18n::text(entry.label_key);
            if entry.is_enabled(selection, busy) {
                menu::Item::Button(label, None, MenuAction(entry.id))
            } else {
                menu::Item::ButtonDisabled(label, None, MenuAction(entry.id))
            }
        })
        .collect()
}

pub fn menu_view(
    core: &Core,
    key_binds: &HashMap<menu::KeyBind, MenuAction>,
    selection: Option<MountState>,
    busy: bool,
) -> Vec<Element<'static, Message>> {
    vec![cosmic::widget::responsive_menu_bar().into_element(
        core,
        key_binds,
        MENU_ID.clone(),
        Message::Surface,
        vec![
            (fl!("menu-file"), group_items(MenuGroup::File, selection, busy)),
            (fl!("menu-tasks"), group_items(MenuGroup::Tasks, selection, busy)),
            (fl!("menu-help"), group_items(MenuGroup::Help, selection, busy)),
        ],
    )]
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuAction(pub ActionId);

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        Message::Action(self.0)
    }
}
