// SPDX-License-Identifier: GPL-3.0-only

//! Data behind the General and File Listing panes

use std::path::{Path, PathBuf};

use ocfs2_sys::{browse, volume};
use ocfs2_types::{DirEntry, Partition, VolumeInfo};

use crate::{ActionError, Services};

/// Volume details for the General pane.
///
/// Non-OCFS2 partitions get what the scan already knows; tunefs is only
/// asked about OCFS2 volumes.
pub async fn load_general(
    services: &Services,
    partition: &Partition,
) -> Result<VolumeInfo, ActionError> {
    let mut info = if partition.is_ocfs2() {
        volume::query_volume(services.runner.as_ref(), &partition.device).await?
    } else {
        VolumeInfo {
            device: partition.device.clone(),
            label: partition.label.clone().unwrap_or_default(),
            uuid: partition.uuid.clone().unwrap_or_default(),
            ..Default::default()
        }
    };

    info.mountpoint = partition.mountpoint.clone();

    if let Some(mountpoint) = &partition.mountpoint {
        let mountpoint = mountpoint.clone();
        info.space = match tokio::task::spawn_blocking(move || volume::space_usage(mountpoint)).await {
            Ok(Ok(space)) => Some(space),
            Ok(Err(e)) => {
                tracing::warn!(%e, device = %partition.device, "could not read free space");
                None
            }
            Err(e) => {
                tracing::warn!(%e, "statvfs task failed");
                None
            }
        };
    }

    Ok(info)
}

/// Lists `relative` under the partition's mountpoint.
pub async fn list_files(mountpoint: &str, relative: &Path) -> Result<Vec<DirEntry>, ActionError> {
    Ok(browse::list_directory(Path::new(mountpoint), relative).await?)
}

/// Parent of `relative`, stopping at the mountpoint itself.
pub fn parent_dir(relative: &Path) -> PathBuf {
    relative.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use ocfs2_types::ProcessOutcome;

    use super::*;
    use crate::testing::{ocfs2_partition, services};

    #[tokio::test]
    async fn queries_ocfs2_volumes() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(
            0,
            "LABEL=shared\nUUID=ABCD\nBLOCKSIZE=4096\nCLUSTERSIZE=4096\nSLOTS=4\n",
        ));

        let info = load_general(&services, &ocfs2_partition("/dev/sdb1", None))
            .await
            .expect("info");
        assert_eq!(info.label, "shared");
        assert_eq!(info.node_slots, Some(4));
        assert_eq!(info.space, None);
        assert_eq!(runner.take_calls()[0][0], "tunefs.ocfs2");
    }

    #[tokio::test]
    async fn other_filesystems_skip_tunefs() {
        let (services, runner, _source) = services();
        let partition = Partition {
            device: "/dev/sda1".to_string(),
            fs_type: Some("ext4".to_string()),
            label: Some("root".to_string()),
            mountpoint: Some("/".to_string()),
            ..Default::default()
        };

        let info = load_general(&services, &partition).await.expect("info");
        assert_eq!(info.label, "root");
        assert!(info.space.is_some());
        assert!(runner.take_calls().is_empty());
    }

    #[tokio::test]
    async fn tunefs_failure_surfaces() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(1, "bad magic"));

        let err = load_general(&services, &ocfs2_partition("/dev/sdb1", None))
            .await
            .expect_err("failed");
        assert!(matches!(err, ActionError::Sys(_)));
    }

    #[tokio::test]
    async fn listing_cannot_escape_mountpoint() {
        let err = list_files("/mnt/ocfs2", Path::new("../etc"))
            .await
            .expect_err("outside");
        assert!(matches!(err, ActionError::Sys(ocfs2_sys::SysError::OutsideRoot(_))));
    }

    #[test]
    fn parent_stops_at_root() {
        assert_eq!(parent_dir(Path::new("a/b")), PathBuf::from("a"));
        assert_eq!(parent_dir(Path::new("a")), PathBuf::new());
        assert_eq!(parent_dir(Path::new("")), PathBuf::new());
    }
}
