// SPDX-License-Identifier: GPL-3.0-only

use crate::app::Message;

#[derive(Debug, Clone)]
pub enum MountDialogMessage {
    MountpointUpdate(String),
    Confirm,
    Cancel,
}

#[derive(Debug, Clone)]
pub enum FormatDialogMessage {
    LabelUpdate(String),
    ClusterSizeUpdate(usize),
    BlockSizeUpdate(usize),
    SlotsUpdate(String),
    ForceUpdate(bool),
    Confirm,
    Cancel,
}

#[derive(Debug, Clone)]
pub enum LabelDialogMessage {
    LabelUpdate(String),
    Confirm,
    Cancel,
}

#[derive(Debug, Clone)]
pub enum NodeSlotsDialogMessage {
    SlotsUpdate(String),
    Confirm,
    Cancel,
}

#[derive(Debug, Clone)]
pub enum NodesDialogMessage {
    NameUpdate(String),
    ClusterUpdate(String),
    NumberUpdate(String),
    IpAddressUpdate(String),
    IpPortUpdate(String),
    Add,
    Remove(String),
    Close,
}

impl From<MountDialogMessage> for Message {
    fn from(val: MountDialogMessage) -> Self {
        Message::MountDialog(val)
    }
}

impl From<FormatDialogMessage> for Message {
    fn from(val: FormatDialogMessage) -> Self {
        Message::FormatDialog(val)
    }
}

impl From<LabelDialogMessage> for Message {
    fn from(val: LabelDialogMessage) -> Self {
        Message::LabelDialog(val)
    }
}

impl From<NodeSlotsDialogMessage> for Message {
    fn from(val: NodeSlotsDialogMessage) -> Self {
        Message::NodeSlotsDialog(val)
    }
}

impl From<NodesDialogMessage> for Message {
    fn from(val: NodesDialogMessage) -> Self {
        Message::NodesDialog(val)
    }
}
