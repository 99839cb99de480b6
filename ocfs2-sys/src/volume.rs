// SPDX-License-Identifier: GPL-3.0-only

//! Volume details from `tunefs.ocfs2 -Q` and free space from `statvfs`

use std::path::Path;

use nix::sys::statvfs::statvfs;
use ocfs2_types::{ProcessRequest, SpaceUsage, VolumeInfo};

use crate::{ProcessRunner, Result, SysError, commands};

/// Parses the KEY=value lines produced by [`commands::VOLUME_QUERY_FORMAT`].
///
/// Numeric fields tunefs could not fill stay `None`.
pub fn parse_volume_query(device: &str, output: &str) -> VolumeInfo {
    let mut info = VolumeInfo {
        device: device.to_string(),
        ..Default::default()
    };

    for line in output.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "LABEL" => info.label = value.to_string(),
            "UUID" => info.uuid = value.to_string(),
            "BLOCKSIZE" => info.block_size = value.parse().ok(),
            "CLUSTERSIZE" => info.cluster_size = value.parse().ok(),
            "SLOTS" => info.node_slots = value.parse().ok(),
            "COMPAT" => info.compat_features = value.to_string(),
            "INCOMPAT" => info.incompat_features = value.to_string(),
            "ROCOMPAT" => info.ro_compat_features = value.to_string(),
            _ => {}
        }
    }

    info
}

/// Runs the volume query against `device`.
pub async fn query_volume(runner: &dyn ProcessRunner, device: &str) -> Result<VolumeInfo> {
    let command = commands::query_volume(device);
    let request = ProcessRequest::new(command.clone(), "Query", "Reading volume details...");
    let outcome = runner.run(&request).await;

    if let Some(signal) = outcome.signal {
        return Err(SysError::CommandKilled {
            command: command.to_string(),
            signal,
        });
    }
    if !outcome.success {
        return Err(SysError::CommandFailed {
            command: command.to_string(),
            output: outcome.output,
        });
    }

    Ok(parse_volume_query(device, &outcome.output))
}

/// Total, used and free bytes of the filesystem mounted at `path`.
pub fn space_usage(path: impl AsRef<Path>) -> Result<SpaceUsage> {
    let stat = statvfs(path.as_ref())?;
    let fragment = stat.fragment_size() as u64;
    let blocks = stat.blocks() as u64;

    Ok(SpaceUsage {
        total: blocks.saturating_mul(fragment),
        used: blocks
            .saturating_sub(stat.blocks_free() as u64)
            .saturating_mul(fragment),
        free: (stat.blocks_available() as u64).saturating_mul(fragment),
    })
}
