// SPDX-License-Identifier: GPL-3.0-only

//! The console's actions and when they are enabled
//!
//! The menu bar and the toolbar are both built from [`ACTIONS`].

use ocfs2_types::MountState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Mount,
    Unmount,
    Refresh,
    Format,
    Relabel,
    NodeSlots,
    Check,
    Repair,
    ClusterConfig,
    Settings,
    Quit,
}

/// What the selection must look like for an action to be enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Nothing,
    Unmounted,
    Mounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    File,
    Tasks,
    Help,
}

#[derive(Debug, Clone, Copy)]
pub struct ActionSpec {
    pub id: ActionId,
    /// Fluent message id of the label
    pub label_key: &'static str,
    pub icon: &'static str,
    pub requirement: Requirement,
    /// Runs an external tool that changes the system
    pub mutating: bool,
    pub menu: MenuGroup,
    pub toolbar: bool,
}

impl ActionSpec {
    pub fn is_enabled(&self, selection: Option<MountState>, busy: bool) -> bool {
        if busy && self.mutating {
            return false;
        }

        match self.requirement {
            Requirement::Nothing => true,
            Requirement::Unmounted => selection == Some(MountState::Unmounted),
            Requirement::Mounted => selection == Some(MountState::Mounted),
        }
    }
}

pub const ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        id: ActionId::Mount,
        label_key: "mount",
        icon: "media-playback-start-symbolic",
        requirement: Requirement::Unmounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: true,
    },
    ActionSpec {
        id: ActionId::Unmount,
        label_key: "unmount",
        icon: "media-playback-stop-symbolic",
        requirement: Requirement::Mounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: true,
    },
    ActionSpec {
        id: ActionId::Refresh,
        label_key: "refresh",
        icon: "view-refresh-symbolic",
        requirement: Requirement::Nothing,
        mutating: false,
        menu: MenuGroup::File,
        toolbar: true,
    },
    ActionSpec {
        id: ActionId::Format,
        label_key: "format",
        icon: "edit-clear-all-symbolic",
        requirement: Requirement::Unmounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::Relabel,
        label_key: "change-label",
        icon: "document-edit-symbolic",
        requirement: Requirement::Unmounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::NodeSlots,
        label_key: "edit-node-slots",
        icon: "list-add-symbolic",
        requirement: Requirement::Unmounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::Check,
        label_key: "check",
        icon: "emblem-ok-symbolic",
        requirement: Requirement::Unmounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::Repair,
        label_key: "repair",
        icon: "applications-engineering-symbolic",
        requirement: Requirement::Unmounted,
        mutating: true,
        menu: MenuGroup::Tasks,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::ClusterConfig,
        label_key: "configure-nodes",
        icon: "network-workgroup-symbolic",
        requirement: Requirement::Nothing,
        mutating: false,
        menu: MenuGroup::Tasks,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::Settings,
        label_key: "settings",
        icon: "help-about-symbolic",
        requirement: Requirement::Nothing,
        mutating: false,
        menu: MenuGroup::Help,
        toolbar: false,
    },
    ActionSpec {
        id: ActionId::Quit,
        label_key: "quit",
        icon: "application-exit-symbolic",
        requirement: Requirement::Nothing,
        mutating: false,
        menu: MenuGroup::File,
        toolbar: false,
    },
];

pub fn spec(id: ActionId) -> &'static ActionSpec {
    ACTIONS
        .iter()
        .find(|spec| spec.id == id)
        .unwrap_or(&ACTIONS[0])
}

pub fn is_enabled(id: ActionId, selection: Option<MountState>, busy: bool) -> bool {
    spec(id).is_enabled(selection, busy)
}

pub fn menu_actions(group: MenuGroup) -> impl Iterator<Item = &'static ActionSpec> {
    ACTIONS.iter().filter(move |spec| spec.menu == group)
}

pub fn toolbar_actions() -> impl Iterator<Item = &'static ActionSpec> {
    ACTIONS.iter().filter(|spec| spec.toolbar)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ActionId; 11] = [
        ActionId::Mount,
        ActionId::Unmount,
        ActionId::Refresh,
        ActionId::Format,
        ActionId::Relabel,
        ActionId::NodeSlots,
        ActionId::Check,
        ActionId::Repair,
        ActionId::ClusterConfig,
        ActionId::Settings,
        ActionId::Quit,
    ];

    fn expected(id: ActionId, selection: Option<MountState>) -> bool {
        match id {
            ActionId::Mount
            | ActionId::Format
            | ActionId::Relabel
            | ActionId::NodeSlots
            | ActionId::Check
            | ActionId::Repair => selection == Some(MountState::Unmounted),
            ActionId::Unmount => selection == Some(MountState::Mounted),
            ActionId::Refresh | ActionId::ClusterConfig | ActionId::Settings | ActionId::Quit => {
                true
            }
        }
    }

    #[test]
    fn every_action_is_in_the_table_once() {
        for id in ALL {
            assert_eq!(ACTIONS.iter().filter(|spec| spec.id == id).count(), 1, "{id:?}");
        }
        assert_eq!(ACTIONS.len(), ALL.len());
    }

    #[test]
    fn enablement_for_every_selection_state() {
        for id in ALL {
            for selection in [None, Some(MountState::Unmounted), Some(MountState::Mounted)] {
                assert_eq!(
                    is_enabled(id, selection, false),
                    expected(id, selection),
                    "{id:?} with {selection:?}"
                );
            }
        }
    }

    #[test]
    fn busy_disables_mutating_actions() {
        for id in ALL {
            let enabled = is_enabled(id, Some(MountState::Unmounted), true)
                || is_enabled(id, Some(MountState::Mounted), true);
            assert_eq!(enabled, !spec(id).mutating, "{id:?}");
        }
        assert!(is_enabled(ActionId::Refresh, None, true));
    }

    #[test]
    fn toolbar_holds_mount_unmount_refresh() {
        let ids: Vec<ActionId> = toolbar_actions().map(|spec| spec.id).collect();
        assert_eq!(ids, vec![ActionId::Mount, ActionId::Unmount, ActionId::Refresh]);
    }
}
