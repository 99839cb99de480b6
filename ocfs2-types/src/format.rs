// SPDX-License-Identifier: GPL-3.0-only

//! Volume layout parameters for `mkfs.ocfs2` and `tunefs.ocfs2`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest volume label OCFS2 stores (bytes)
pub const MAX_LABEL_LEN: usize = 64;

/// Upper bound on node slots
pub const MAX_NODE_SLOTS: u16 = 255;

pub const DEFAULT_NODE_SLOTS: u16 = 4;

/// Cluster sizes accepted by mkfs.ocfs2
pub const CLUSTER_SIZES: &[u32] = &[
    4 * 1024,
    8 * 1024,
    16 * 1024,
    32 * 1024,
    64 * 1024,
    128 * 1024,
    256 * 1024,
    512 * 1024,
    1024 * 1024,
];

/// Block sizes accepted by mkfs.ocfs2
pub const BLOCK_SIZES: &[u32] = &[512, 1024, 2048, 4096];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Label is longer than {MAX_LABEL_LEN} bytes")]
    LabelTooLong,

    #[error("Label may not be empty")]
    LabelEmpty,

    #[error("Number of node slots must be between 1 and {MAX_NODE_SLOTS}")]
    NodeSlotsOutOfRange,

    #[error("Number of node slots cannot be reduced below {current}")]
    NodeSlotsBelowCurrent { current: u16 },

    #[error("Unsupported cluster size: {0}")]
    ClusterSize(u32),

    #[error("Unsupported block size: {0}")]
    BlockSize(u32),

    #[error("Node name may not be empty or contain whitespace")]
    NodeName,

    #[error("Invalid IP address: {0}")]
    IpAddress(String),

    #[error("Invalid IP port: {0}")]
    IpPort(u32),

    #[error("Cluster name may not be empty or contain whitespace")]
    ClusterName,
}

/// Options for formatting a device as OCFS2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Volume label (empty for none)
    pub label: String,

    /// Cluster size in bytes, `None` lets mkfs.ocfs2 pick
    pub cluster_size: Option<u32>,

    /// Block size in bytes, `None` lets mkfs.ocfs2 pick
    pub block_size: Option<u32>,

    pub node_slots: u16,

    /// Overwrite an existing OCFS2 signature without asking
    pub force: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            cluster_size: None,
            block_size: None,
            node_slots: DEFAULT_NODE_SLOTS,
            force: false,
        }
    }
}

impl FormatOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.len() > MAX_LABEL_LEN {
            return Err(ValidationError::LabelTooLong);
        }

        validate_node_slots(self.node_slots, None)?;

        if let Some(size) = self.cluster_size
            && !CLUSTER_SIZES.contains(&size)
        {
            return Err(ValidationError::ClusterSize(size));
        }

        if let Some(size) = self.block_size
            && !BLOCK_SIZES.contains(&size)
        {
            return Err(ValidationError::BlockSize(size));
        }

        Ok(())
    }
}

/// A relabel needs a non-empty label within the on-disk limit.
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::LabelEmpty);
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(ValidationError::LabelTooLong);
    }
    Ok(())
}

/// Node slots must be within 1..=255 and, when known, not fewer than the
/// volume already has.
pub fn validate_node_slots(slots: u16, current: Option<u16>) -> Result<(), ValidationError> {
    if slots == 0 || slots > MAX_NODE_SLOTS {
        return Err(ValidationError::NodeSlotsOutOfRange);
    }
    if let Some(current) = current
        && slots < current
    {
        return Err(ValidationError::NodeSlotsBelowCurrent { current });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert_eq!(FormatOptions::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_long_label() {
        let options = FormatOptions {
            label: "x".repeat(MAX_LABEL_LEN + 1),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(ValidationError::LabelTooLong));
    }

    #[test]
    fn rejects_odd_sizes() {
        let options = FormatOptions {
            cluster_size: Some(3000),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(ValidationError::ClusterSize(3000)));

        let options = FormatOptions {
            block_size: Some(8192),
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(ValidationError::BlockSize(8192)));
    }

    #[test]
    fn node_slot_bounds() {
        assert_eq!(
            validate_node_slots(0, None),
            Err(ValidationError::NodeSlotsOutOfRange)
        );
        assert_eq!(
            validate_node_slots(256, None),
            Err(ValidationError::NodeSlotsOutOfRange)
        );
        assert_eq!(
            validate_node_slots(2, Some(4)),
            Err(ValidationError::NodeSlotsBelowCurrent { current: 4 })
        );
        assert_eq!(validate_node_slots(8, Some(4)), Ok(()));
    }

    #[test]
    fn label_rules() {
        assert_eq!(validate_label("  "), Err(ValidationError::LabelEmpty));
        assert_eq!(validate_label("shared"), Ok(()));
    }
}
