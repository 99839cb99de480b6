// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Superblock details of an OCFS2 volume, shown on the General tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VolumeInfo {
    pub device: String,
    pub label: String,
    pub uuid: String,
    pub block_size: Option<u32>,
    pub cluster_size: Option<u32>,
    pub node_slots: Option<u16>,
    pub compat_features: String,
    pub incompat_features: String,
    pub ro_compat_features: String,
    pub mountpoint: Option<String>,
    /// Only available while mounted
    pub space: Option<SpaceUsage>,
}

/// Filesystem space as reported by statvfs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl SpaceUsage {
    pub fn percent_used(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.used as f64 / self.total as f64) * 100.0).round() as u32
    }
}
