// SPDX-License-Identifier: GPL-3.0-only

use ocfs2_types::{
    BLOCK_SIZES, CLUSTER_SIZES, ClusterNode, DEFAULT_NODE_PORT, FormatOptions, FsckReport,
    NodeDraft, Selection, ValidationError,
};

#[derive(Debug, Clone)]
pub enum ShowDialog {
    Mount(MountDialog),
    Format(FormatDialog),
    Relabel(LabelDialog),
    NodeSlots(NodeSlotsDialog),
    Nodes(NodesDialog),
    ConfirmRepair { selection: Selection },
    FsckReport(FsckReport),
    Info { title: String, body: String },
}

#[derive(Debug, Clone)]
pub struct MountDialog {
    pub selection: Selection,
    pub mountpoint: String,
}

/// Index 0 of the size dropdowns means "let mkfs.ocfs2 decide".
#[derive(Debug, Clone)]
pub struct FormatDialog {
    pub selection: Selection,
    pub label: String,
    pub cluster_size_index: usize,
    pub block_size_index: usize,
    pub slots_text: String,
    pub force: bool,
    pub error: Option<String>,
}

impl FormatDialog {
    pub fn new(selection: Selection, slots: u16, cluster_size: u32, block_size: u32) -> Self {
        Self {
            selection,
            label: String::new(),
            cluster_size_index: size_index(CLUSTER_SIZES, cluster_size),
            block_size_index: size_index(BLOCK_SIZES, block_size),
            slots_text: slots.to_string(),
            force: false,
            error: None,
        }
    }

    pub fn options(&self) -> Result<FormatOptions, ValidationError> {
        Ok(FormatOptions {
            label: self.label.trim().to_string(),
            cluster_size: size_at(CLUSTER_SIZES, self.cluster_size_index),
            block_size: size_at(BLOCK_SIZES, self.block_size_index),
            node_slots: parse_slots(&self.slots_text)?,
            force: self.force,
        })
    }
}

fn size_index(sizes: &[u32], size: u32) -> usize {
    sizes
        .iter()
        .position(|s| *s == size)
        .map(|i| i + 1)
        .unwrap_or(0)
}

fn size_at(sizes: &[u32], index: usize) -> Option<u32> {
    index.checked_sub(1).and_then(|i| sizes.get(i).copied())
}

fn parse_slots(text: &str) -> Result<u16, ValidationError> {
    text.trim()
        .parse()
        .map_err(|_| ValidationError::NodeSlotsOutOfRange)
}

#[derive(Debug, Clone)]
pub struct LabelDialog {
    pub selection: Selection,
    pub label: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NodeSlotsDialog {
    pub selection: Selection,
    /// Slots the volume has now, when the General pane knows it
    pub current: Option<u16>,
    pub slots_text: String,
    pub error: Option<String>,
}

impl NodeSlotsDialog {
    pub fn slots(&self) -> Result<u16, ValidationError> {
        parse_slots(&self.slots_text)
    }
}

#[derive(Debug, Clone)]
pub struct NodesDialog {
    pub nodes: Vec<ClusterNode>,
    pub name: String,
    pub cluster: String,
    pub number_text: String,
    pub ip_address: String,
    pub ip_port_text: String,
    pub error: Option<String>,
    pub running: bool,
    /// Set after a successful change so the next listing clears the form
    pub reset_on_reload: bool,
}

impl NodesDialog {
    pub fn new(nodes: Vec<ClusterNode>) -> Self {
        let mut dialog = Self {
            nodes,
            name: String::new(),
            cluster: String::new(),
            number_text: String::new(),
            ip_address: String::new(),
            ip_port_text: DEFAULT_NODE_PORT.to_string(),
            error: None,
            running: false,
            reset_on_reload: false,
        };
        dialog.reset_draft();
        dialog
    }

    pub fn set_nodes(&mut self, nodes: Vec<ClusterNode>) {
        self.nodes = nodes;
        if std::mem::take(&mut self.reset_on_reload) {
            self.reset_draft();
        }
    }

    fn reset_draft(&mut self) {
        self.name.clear();
        self.ip_address.clear();
        self.ip_port_text = DEFAULT_NODE_PORT.to_string();
        self.number_text = self
            .nodes
            .iter()
            .map(|node| node.number + 1)
            .max()
            .unwrap_or(0)
            .to_string();
        if self.cluster.is_empty()
            && let Some(node) = self.nodes.first()
        {
            self.cluster = node.cluster.clone();
        }
        self.error = None;
    }

    pub fn draft(&self) -> Result<NodeDraft, String> {
        let number = self
            .number_text
            .trim()
            .parse()
            .map_err(|_| format!("Invalid node number: {}", self.number_text.trim()))?;
        let ip_port = self
            .ip_port_text
            .trim()
            .parse()
            .map_err(|_| ValidationError::IpPort(0).to_string())?;

        Ok(NodeDraft {
            name: self.name.trim().to_string(),
            cluster: self.cluster.trim().to_string(),
            number,
            ip_address: self.ip_address.trim().to_string(),
            ip_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection {
            device: "/dev/sdc1".to_string(),
            mountpoint: None,
        }
    }

    fn node(name: &str, number: u32) -> ClusterNode {
        ClusterNode {
            name: name.to_string(),
            cluster: "ocfs2".to_string(),
            number,
            ip_address: "10.0.0.1".to_string(),
            ip_port: DEFAULT_NODE_PORT,
            status: String::new(),
        }
    }

    #[test]
    fn format_dialog_maps_dropdowns_to_sizes() {
        let mut dialog = FormatDialog::new(selection(), 4, 0, 4096);
        assert_eq!(dialog.cluster_size_index, 0);
        assert_eq!(dialog.block_size_index, BLOCK_SIZES.len());

        dialog.cluster_size_index = 1;
        dialog.label = "  shared ".to_string();
        let options = dialog.options().expect("valid");
        assert_eq!(options.cluster_size, Some(CLUSTER_SIZES[0]));
        assert_eq!(options.block_size, Some(4096));
        assert_eq!(options.node_slots, 4);
        assert_eq!(options.label, "shared");
    }

    #[test]
    fn format_dialog_rejects_bad_slots() {
        let mut dialog = FormatDialog::new(selection(), 4, 0, 0);
        dialog.slots_text = "many".to_string();
        assert_eq!(dialog.options(), Err(ValidationError::NodeSlotsOutOfRange));
    }

    #[test]
    fn nodes_dialog_suggests_next_number() {
        let dialog = NodesDialog::new(vec![node("a", 0), node("b", 3)]);
        assert_eq!(dialog.number_text, "4");
        assert_eq!(dialog.cluster, "ocfs2");
        assert_eq!(dialog.ip_port_text, "7777");

        let empty = NodesDialog::new(Vec::new());
        assert_eq!(empty.number_text, "0");
        assert!(empty.cluster.is_empty());
    }

    #[test]
    fn reload_keeps_form_until_change_succeeds() {
        let mut dialog = NodesDialog::new(vec![node("a", 0)]);
        dialog.name = "b".to_string();
        dialog.error = Some("failed".to_string());

        dialog.set_nodes(vec![node("a", 0)]);
        assert_eq!(dialog.name, "b");
        assert_eq!(dialog.error.as_deref(), Some("failed"));

        dialog.reset_on_reload = true;
        dialog.set_nodes(vec![node("a", 0), node("b", 1)]);
        assert!(dialog.name.is_empty());
        assert_eq!(dialog.number_text, "2");
        assert!(dialog.error.is_none());
        assert!(!dialog.reset_on_reload);
    }

    #[test]
    fn nodes_dialog_builds_draft() {
        let mut dialog = NodesDialog::new(Vec::new());
        dialog.name = "node1".to_string();
        dialog.cluster = "ocfs2".to_string();
        dialog.ip_address = " 10.0.0.9 ".to_string();

        let draft = dialog.draft().expect("draft");
        assert_eq!(draft.ip_address, "10.0.0.9");
        assert_eq!(draft.ip_port, u32::from(DEFAULT_NODE_PORT));
        assert_eq!(draft.number, 0);

        dialog.number_text = "x".to_string();
        assert!(dialog.draft().is_err());
    }
}
