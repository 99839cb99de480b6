// SPDX-License-Identifier: GPL-3.0-only

//! Command lines for every external tool the console drives
//!
//! Argument order matters to the tools and is kept stable here.

use ocfs2_types::{
    CommandLine, FormatOptions, FsckMode, NodeDraft, OCFS2_FS_TYPE, size_label,
};

pub const MOUNT: &str = "mount";
pub const UMOUNT: &str = "umount";
pub const MKFS: &str = "mkfs.ocfs2";
pub const TUNEFS: &str = "tunefs.ocfs2";
pub const FSCK: &str = "fsck.ocfs2";
pub const O2CB_CTL: &str = "o2cb_ctl";
pub const BLKID: &str = "blkid";

/// Query format handed to `tunefs.ocfs2 -Q`; tunefs expands the `\n` escapes.
pub const VOLUME_QUERY_FORMAT: &str = "LABEL=%V\\nUUID=%U\\nBLOCKSIZE=%B\\nCLUSTERSIZE=%T\\nSLOTS=%N\\nCOMPAT=%M\\nINCOMPAT=%H\\nROCOMPAT=%O\\n";

pub fn mount(device: &str, mountpoint: &str) -> CommandLine {
    CommandLine::new(MOUNT)
        .args(["-t", OCFS2_FS_TYPE])
        .arg(device)
        .arg(mountpoint)
}

pub fn umount(mountpoint: &str) -> CommandLine {
    CommandLine::new(UMOUNT).arg(mountpoint)
}

pub fn mkfs(device: &str, options: &FormatOptions) -> CommandLine {
    let mut command = CommandLine::new(MKFS).arg("-x");

    if options.force {
        command = command.arg("-F");
    }
    if let Some(block_size) = options.block_size {
        command = command.arg("-b").arg(size_label(block_size));
    }
    if let Some(cluster_size) = options.cluster_size {
        command = command.arg("-C").arg(size_label(cluster_size));
    }

    command = command.arg("-N").arg(options.node_slots.to_string());

    if !options.label.is_empty() {
        command = command.arg("-L").arg(options.label.as_str());
    }

    command.arg(device)
}

pub fn tune_label(device: &str, label: &str) -> CommandLine {
    CommandLine::new(TUNEFS).arg("-L").arg(label).arg(device)
}

pub fn tune_node_slots(device: &str, slots: u16) -> CommandLine {
    CommandLine::new(TUNEFS)
        .arg("-N")
        .arg(slots.to_string())
        .arg(device)
}

pub fn query_volume(device: &str) -> CommandLine {
    CommandLine::new(TUNEFS)
        .arg("-Q")
        .arg(VOLUME_QUERY_FORMAT)
        .arg(device)
}

pub fn fsck(device: &str, mode: FsckMode) -> CommandLine {
    CommandLine::new(FSCK).arg(mode.flag()).arg(device)
}

pub fn blkid_export() -> CommandLine {
    CommandLine::new(BLKID).args(["-o", "export"])
}

pub fn list_nodes() -> CommandLine {
    CommandLine::new(O2CB_CTL).args(["-I", "-t", "node", "-o"])
}

pub fn add_node(draft: &NodeDraft) -> CommandLine {
    CommandLine::new(O2CB_CTL)
        .args(["-C", "-n"])
        .arg(draft.name.as_str())
        .args(["-t", "node"])
        .arg("-a")
        .arg(format!("number={}", draft.number))
        .arg("-a")
        .arg(format!("ip_address={}", draft.ip_address.trim()))
        .arg("-a")
        .arg(format!("ip_port={}", draft.ip_port))
        .arg("-a")
        .arg(format!("cluster={}", draft.cluster))
}

pub fn remove_node(name: &str) -> CommandLine {
    CommandLine::new(O2CB_CTL).args(["-D", "-n"]).arg(name)
}

pub fn create_cluster(name: &str) -> CommandLine {
    CommandLine::new(O2CB_CTL)
        .args(["-C", "-n"])
        .arg(name)
        .args(["-t", "cluster", "-i"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_argv() {
        assert_eq!(
            mount("/dev/sdb1", "/mnt/ocfs2").argv(),
            vec!["mount", "-t", "ocfs2", "/dev/sdb1", "/mnt/ocfs2"]
        );
    }

    #[test]
    fn umount_argv() {
        assert_eq!(umount("/mnt/ocfs2").argv(), vec!["umount", "/mnt/ocfs2"]);
    }

    #[test]
    fn mkfs_with_defaults_only_passes_slots() {
        let argv = mkfs("/dev/sdc1", &FormatOptions::default()).argv();
        assert_eq!(argv, vec!["mkfs.ocfs2", "-x", "-N", "4", "/dev/sdc1"]);
    }

    #[test]
    fn mkfs_with_everything() {
        let options = FormatOptions {
            label: "shared".to_string(),
            cluster_size: Some(64 * 1024),
            block_size: Some(4096),
            node_slots: 8,
            force: true,
        };
        assert_eq!(
            mkfs("/dev/sdc1", &options).argv(),
            vec![
                "mkfs.ocfs2", "-x", "-F", "-b", "4K", "-C", "64K", "-N", "8", "-L", "shared",
                "/dev/sdc1"
            ]
        );
    }

    #[test]
    fn tunefs_argv() {
        assert_eq!(
            tune_label("/dev/sdb1", "data").argv(),
            vec!["tunefs.ocfs2", "-L", "data", "/dev/sdb1"]
        );
        assert_eq!(
            tune_node_slots("/dev/sdb1", 16).argv(),
            vec!["tunefs.ocfs2", "-N", "16", "/dev/sdb1"]
        );
    }

    #[test]
    fn fsck_argv_depends_on_mode() {
        assert_eq!(
            fsck("/dev/sdb1", FsckMode::Check).argv(),
            vec!["fsck.ocfs2", "-n", "/dev/sdb1"]
        );
        assert_eq!(
            fsck("/dev/sdb1", FsckMode::Repair).argv(),
            vec!["fsck.ocfs2", "-y", "/dev/sdb1"]
        );
    }

    #[test]
    fn o2cb_ctl_argv() {
        let draft = NodeDraft {
            name: "node2".to_string(),
            cluster: "ocfs2".to_string(),
            number: 2,
            ip_address: " 10.0.0.2 ".to_string(),
            ip_port: 7777,
        };
        assert_eq!(
            add_node(&draft).argv(),
            vec![
                "o2cb_ctl",
                "-C",
                "-n",
                "node2",
                "-t",
                "node",
                "-a",
                "number=2",
                "-a",
                "ip_address=10.0.0.2",
                "-a",
                "ip_port=7777",
                "-a",
                "cluster=ocfs2"
            ]
        );
        assert_eq!(
            remove_node("node2").argv(),
            vec!["o2cb_ctl", "-D", "-n", "node2"]
        );
        assert_eq!(
            create_cluster("ocfs2").argv(),
            vec!["o2cb_ctl", "-C", "-n", "ocfs2", "-t", "cluster", "-i"]
        );
        assert_eq!(
            list_nodes().argv(),
            vec!["o2cb_ctl", "-I", "-t", "node", "-o"]
        );
    }
}
