// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Filesystem type string reported by blkid for OCFS2 volumes
pub const OCFS2_FS_TYPE: &str = "ocfs2";

/// One block device partition as shown in the partition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Partition {
    /// Device path (e.g. "/dev/sdb1")
    pub device: String,

    /// Where the device is currently mounted, if anywhere
    pub mountpoint: Option<String>,

    pub label: Option<String>,

    pub uuid: Option<String>,

    /// Filesystem type as detected by blkid
    pub fs_type: Option<String>,

    /// Size in bytes (from /proc/partitions)
    pub size: u64,
}

impl Partition {
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Default::default()
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mountpoint.is_some()
    }

    pub fn is_ocfs2(&self) -> bool {
        self.fs_type.as_deref() == Some(OCFS2_FS_TYPE)
    }

    pub fn mount_state(&self) -> MountState {
        if self.is_mounted() {
            MountState::Mounted
        } else {
            MountState::Unmounted
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            device: self.device.clone(),
            mountpoint: self.mountpoint.clone(),
        }
    }

    /// Name without the /dev/ prefix.
    pub fn name(&self) -> &str {
        self.device.rsplit('/').next().unwrap_or(&self.device)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountState {
    Unmounted,
    Mounted,
}

/// The highlighted (device, mountpoint) pair of the partition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub device: String,
    pub mountpoint: Option<String>,
}

impl Selection {
    pub fn mount_state(&self) -> MountState {
        if self.mountpoint.is_some() {
            MountState::Mounted
        } else {
            MountState::Unmounted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_partition_yields_mounted_selection() {
        let partition = Partition {
            device: "/dev/sdb1".to_string(),
            mountpoint: Some("/mnt/ocfs2".to_string()),
            fs_type: Some("ocfs2".to_string()),
            ..Default::default()
        };

        let selection = partition.selection();
        assert_eq!(selection.device, "/dev/sdb1");
        assert_eq!(selection.mountpoint.as_deref(), Some("/mnt/ocfs2"));
        assert_eq!(selection.mount_state(), MountState::Mounted);
        assert!(partition.is_ocfs2());
        assert_eq!(partition.name(), "sdb1");
    }

    #[test]
    fn unmounted_partition() {
        let partition = Partition::new("/dev/sdc");
        assert_eq!(partition.mount_state(), MountState::Unmounted);
        assert!(!partition.is_ocfs2());
    }
}
