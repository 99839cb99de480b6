// SPDX-License-Identifier: GPL-3.0-only

//! OCFS2 tool detection
//!
//! Reports which of the external utilities the console drives are installed,
//! with a package hint for the missing ones.

use std::sync::LazyLock;

use serde::Serialize;

use crate::commands;

/// An external tool the console depends on
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Executable looked up in PATH
    pub command: &'static str,
    /// What the console uses it for
    pub purpose: &'static str,
    /// Package name hint (for common distros)
    pub package_hint: &'static str,
    pub available: bool,
}

static TOOL_REQUIREMENTS: LazyLock<Vec<ToolInfo>> = LazyLock::new(|| {
    vec![
        ToolInfo {
            command: commands::MKFS,
            purpose: "Format",
            package_hint: "ocfs2-tools",
            available: false,
        },
        ToolInfo {
            command: commands::TUNEFS,
            purpose: "Change label, node slots and volume details",
            package_hint: "ocfs2-tools",
            available: false,
        },
        ToolInfo {
            command: commands::FSCK,
            purpose: "Check and repair",
            package_hint: "ocfs2-tools",
            available: false,
        },
        ToolInfo {
            command: "mount.ocfs2",
            purpose: "Mount",
            package_hint: "ocfs2-tools",
            available: false,
        },
        ToolInfo {
            command: commands::O2CB_CTL,
            purpose: "Cluster configuration",
            package_hint: "ocfs2-tools",
            available: false,
        },
        ToolInfo {
            command: commands::BLKID,
            purpose: "Filesystem detection",
            package_hint: "util-linux",
            available: false,
        },
    ]
});

fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

/// Detect all tools and return their availability status
pub fn detect_tools() -> Vec<ToolInfo> {
    TOOL_REQUIREMENTS
        .iter()
        .map(|info| ToolInfo {
            available: command_exists(info.command),
            ..info.clone()
        })
        .collect()
}

pub fn missing_tools() -> Vec<ToolInfo> {
    detect_tools()
        .into_iter()
        .filter(|info| !info.available)
        .collect()
}

pub fn is_available(command: &str) -> bool {
    command_exists(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_is_described() {
        let tools = detect_tools();
        assert_eq!(tools.len(), 6);
        for tool in &tools {
            assert!(!tool.command.is_empty());
            assert!(!tool.purpose.is_empty());
            assert!(!tool.package_hint.is_empty());
        }
    }

    #[test]
    fn missing_is_subset_of_detected() {
        let missing = missing_tools();
        assert!(missing.iter().all(|tool| !tool.available));
        assert!(missing.len() <= detect_tools().len());
    }

    #[test]
    fn nonsense_command_is_unavailable() {
        assert!(!is_available("definitely-not-an-ocfs2-tool"));
    }
}
