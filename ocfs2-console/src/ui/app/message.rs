// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use crate::config::Config;
use crate::ui::app::state::{ContextPage, PaneTab};
use crate::ui::dialogs::message::{
    FormatDialogMessage, LabelDialogMessage, MountDialogMessage, NodeSlotsDialogMessage,
    NodesDialogMessage,
};
use crate::ui::dialogs::state::ShowDialog;
use crate::ui::error::Failure;
use ocfs2_ops::{ActionId, ActionOutcome};
use ocfs2_types::{ClusterNode, DirEntry, OperationId, Partition, Selection, VolumeInfo};

/// What to reload once a mutating command finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessKind {
    Volume,
    Cluster,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPath(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),
    Surface(cosmic::surface::Action),
    Action(ActionId),

    // Partition list
    FilterInput(String),
    FilterSubmit,
    Refreshed(Result<Vec<Partition>, String>),
    SelectPartition(String),
    SelectTab(PaneTab),

    // Info panes
    GeneralLoaded {
        device: String,
        result: Result<VolumeInfo, String>,
    },
    FilesLoaded {
        mountpoint: String,
        relative: PathBuf,
        result: Result<Vec<DirEntry>, String>,
    },
    OpenDirectory(String),
    ParentDirectory,
    NodesLoaded(Result<Vec<ClusterNode>, String>),

    // Dialogs
    Dialog(Box<ShowDialog>),
    CloseDialog,
    MountDialog(MountDialogMessage),
    FormatDialog(FormatDialogMessage),
    LabelDialog(LabelDialogMessage),
    NodeSlotsDialog(NodeSlotsDialogMessage),
    NodesDialog(NodesDialogMessage),
    ConfirmRepair(Selection),

    // Mutating commands
    ShowBusy(OperationId),
    BusyTick,
    ProcessFinished {
        id: OperationId,
        kind: ProcessKind,
        result: Result<ActionOutcome, Failure>,
    },

    // Settings
    LogLevelChanged(usize),
    ToggleLogToDisk(bool),
    DefaultMountpointChanged(String),
}
