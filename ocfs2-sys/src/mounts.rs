// SPDX-License-Identifier: GPL-3.0-only

//! /proc/self/mountinfo parsing

use crate::{Result, SysError};

pub const MOUNTINFO_PATH: &str = "/proc/self/mountinfo";

/// One mounted filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub major: u32,
    pub minor: u32,
    pub mountpoint: String,
    pub fs_type: String,
    pub source: String,
}

pub fn parse_mountinfo(input: &str) -> Result<Vec<MountEntry>> {
    let mut entries = Vec::new();

    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        let invalid = || SysError::Parse {
            source_name: "mountinfo",
            line: line.to_string(),
        };

        let (left, right) = line.split_once(" - ").ok_or_else(invalid)?;

        let left_fields: Vec<&str> = left.split_whitespace().collect();
        let dev = left_fields.get(2).ok_or_else(invalid)?;
        let mount_point = left_fields.get(4).ok_or_else(invalid)?;

        let (major, minor) = dev.split_once(':').ok_or_else(invalid)?;
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;

        let mut right_fields = right.split_whitespace();
        let fs_type = right_fields.next().ok_or_else(invalid)?;
        let source = right_fields.next().unwrap_or_default();

        entries.push(MountEntry {
            major,
            minor,
            mountpoint: unescape_mount_field(mount_point),
            fs_type: fs_type.to_string(),
            source: unescape_mount_field(source),
        });
    }

    Ok(entries)
}

/// First mountpoint of the block device with the given numbers.
pub fn mountpoint_for(entries: &[MountEntry], major: u32, minor: u32) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.major == major && entry.minor == minor)
        .map(|entry| entry.mountpoint.as_str())
}

fn unescape_mount_field(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'\\'
            && index + 3 < bytes.len()
            && bytes[index + 1..index + 4].iter().all(|b| (b'0'..=b'7').contains(b))
        {
            let octal = &value[index + 1..index + 4];
            if let Ok(num) = u8::from_str_radix(octal, 8) {
                output.push(num);
                index += 4;
                continue;
            }
        }

        output.push(bytes[index]);
        index += 1;
    }

    String::from_utf8_lossy(&output).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "36 25 8:2 / / rw,relatime - ext4 /dev/nvme0n1p2 rw\n\
37 25 0:5 / /proc rw,nosuid,nodev,noexec,relatime - proc proc rw\n\
90 25 8:17 / /mnt/shared\\040data rw,relatime shared:40 - ocfs2 /dev/sdb1 rw,_netdev,heartbeat=local\n";

    #[test]
    fn parses_devices_and_mountpoints() {
        let entries = parse_mountinfo(SAMPLE).expect("parse should succeed");
        assert_eq!(entries.len(), 3);

        let ocfs2 = &entries[2];
        assert_eq!((ocfs2.major, ocfs2.minor), (8, 17));
        assert_eq!(ocfs2.mountpoint, "/mnt/shared data");
        assert_eq!(ocfs2.fs_type, "ocfs2");
        assert_eq!(ocfs2.source, "/dev/sdb1");
    }

    #[test]
    fn looks_up_by_device_numbers() {
        let entries = parse_mountinfo(SAMPLE).expect("parse should succeed");
        assert_eq!(mountpoint_for(&entries, 8, 17), Some("/mnt/shared data"));
        assert_eq!(mountpoint_for(&entries, 8, 18), None);
    }

    #[test]
    fn keeps_non_ascii_mountpoints() {
        let entries = parse_mountinfo(
            "90 25 8:17 / /mnt/donn\\303\\251es rw - ocfs2 /dev/sdb1 rw\n\
             91 25 8:18 / /mnt/données rw - ocfs2 /dev/sdb2 rw\n",
        )
        .expect("parse should succeed");
        assert_eq!(entries[0].mountpoint, "/mnt/données");
        assert_eq!(entries[1].mountpoint, "/mnt/données");
    }

    #[test]
    fn rejects_truncated_lines() {
        assert!(parse_mountinfo("36 25 8:2 /\n").is_err());
        assert!(parse_mountinfo("36 25 bogus / / rw - ext4 /dev/sda rw\n").is_err());
    }
}
