// SPDX-License-Identifier: GPL-3.0-only

//! Partition enumeration
//!
//! Combines three sources:
//! - `/proc/partitions` for the list of block devices and their sizes
//! - `blkid -o export` for filesystem type, label and UUID
//! - `/proc/self/mountinfo` for current mountpoints

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use ocfs2_types::{Partition, ProcessRequest};

use crate::mounts::{MountEntry, mountpoint_for, parse_mountinfo};
use crate::{ProcessRunner, Result, SysError, commands};

pub const PROC_PARTITIONS_PATH: &str = "/proc/partitions";

/// blkid exits with 2 when it found nothing to report
const BLKID_NOTHING_FOUND: i32 = 2;

#[async_trait]
pub trait PartitionSource: Send + Sync {
    /// Every partition on the system, sorted by device path.
    async fn scan(&self) -> Result<Vec<Partition>>;
}

/// A row of /proc/partitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcPartition {
    pub major: u32,
    pub minor: u32,
    /// Size in 1 KiB blocks
    pub blocks: u64,
    pub name: String,
}

/// Probe results from blkid for one device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlkidEntry {
    pub device: String,
    pub fs_type: Option<String>,
    pub label: Option<String>,
    pub uuid: Option<String>,
}

pub fn parse_proc_partitions(input: &str) -> Vec<ProcPartition> {
    input
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let major = fields.next()?.parse().ok()?;
            let minor = fields.next()?.parse().ok()?;
            let blocks = fields.next()?.parse().ok()?;
            let name = fields.next()?.to_string();

            Some(ProcPartition {
                major,
                minor,
                blocks,
                name,
            })
        })
        .collect()
}

/// Parses `blkid -o export`: KEY=value lines, one blank-line separated block
/// per device.
pub fn parse_blkid_export(input: &str) -> Vec<BlkidEntry> {
    let mut entries = Vec::new();
    let mut current = BlkidEntry::default();

    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            if !current.device.is_empty() {
                entries.push(std::mem::take(&mut current));
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        match key {
            "DEVNAME" => current.device = value.to_string(),
            "TYPE" => current.fs_type = Some(value.to_string()),
            "LABEL" => current.label = Some(value.to_string()),
            "UUID" => current.uuid = Some(value.to_string()),
            _ => {}
        }
    }

    if !current.device.is_empty() {
        entries.push(current);
    }

    entries
}

/// Merges the three sources into the partition list.
///
/// Extended-partition placeholders (one block) are skipped.
pub fn assemble_partitions(
    proc_partitions: &[ProcPartition],
    blkid: &[BlkidEntry],
    mounts: &[MountEntry],
) -> Vec<Partition> {
    let probes: HashMap<&str, &BlkidEntry> = blkid
        .iter()
        .map(|entry| (entry.device.as_str(), entry))
        .collect();

    let mut partitions: Vec<Partition> = proc_partitions
        .iter()
        .filter(|part| part.blocks > 1)
        .map(|part| {
            let device = format!("/dev/{}", part.name);
            let probe = probes.get(device.as_str());

            Partition {
                mountpoint: mountpoint_for(mounts, part.major, part.minor).map(str::to_string),
                label: probe.and_then(|p| p.label.clone()),
                uuid: probe.and_then(|p| p.uuid.clone()),
                fs_type: probe.and_then(|p| p.fs_type.clone()),
                size: part.blocks.saturating_mul(1024),
                device,
            }
        })
        .collect();

    partitions.sort_by(|a, b| a.device.cmp(&b.device));
    partitions
}

/// Scans the running system.
pub struct SystemPartitionSource {
    runner: Arc<dyn ProcessRunner>,
    proc_partitions: PathBuf,
    mountinfo: PathBuf,
}

impl SystemPartitionSource {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            proc_partitions: PathBuf::from(PROC_PARTITIONS_PATH),
            mountinfo: PathBuf::from(crate::mounts::MOUNTINFO_PATH),
        }
    }

    async fn probe_blkid(&self) -> Result<Vec<BlkidEntry>> {
        let command = commands::blkid_export();
        let request = ProcessRequest::new(command.clone(), "Scan", "Scanning devices...");
        let outcome = self.runner.run(&request).await;

        if outcome.success {
            return Ok(parse_blkid_export(&outcome.output));
        }

        if outcome.exit_code == Some(BLKID_NOTHING_FOUND) {
            return Ok(Vec::new());
        }

        if let Some(signal) = outcome.signal {
            return Err(SysError::CommandKilled {
                command: command.to_string(),
                signal,
            });
        }

        Err(SysError::CommandFailed {
            command: command.to_string(),
            output: outcome.output,
        })
    }
}

#[async_trait]
impl PartitionSource for SystemPartitionSource {
    async fn scan(&self) -> Result<Vec<Partition>> {
        let proc_partitions = tokio::fs::read_to_string(&self.proc_partitions).await?;
        let mountinfo = tokio::fs::read_to_string(&self.mountinfo).await?;

        let blkid = match self.probe_blkid().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(%e, "blkid probe failed, listing devices without filesystem details");
                Vec::new()
            }
        };

        let partitions = assemble_partitions(
            &parse_proc_partitions(&proc_partitions),
            &blkid,
            &parse_mountinfo(&mountinfo)?,
        );

        tracing::debug!(count = partitions.len(), "scanned partitions");
        Ok(partitions)
    }
}
