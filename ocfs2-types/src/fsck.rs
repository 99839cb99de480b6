// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

// Exit status bits of fsck.ocfs2
const FSCK_NONDESTRUCT: i32 = 1;
const FSCK_REBOOT: i32 = 2;
const FSCK_UNCORRECTED: i32 = 4;
const FSCK_ERROR: i32 = 8;
const FSCK_USAGE: i32 = 16;
const FSCK_CANCELED: i32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsckMode {
    /// Read-only check (`-n`)
    Check,
    /// Repair answering yes to every question (`-y`)
    Repair,
}

impl FsckMode {
    pub fn from_check_flag(check: bool) -> Self {
        if check { Self::Check } else { Self::Repair }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Check => "-n",
            Self::Repair => "-y",
        }
    }
}

/// Decoded fsck.ocfs2 exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FsckStatus {
    pub errors_corrected: bool,
    pub reboot_required: bool,
    pub errors_uncorrected: bool,
    pub operational_error: bool,
    pub usage_error: bool,
    pub cancelled: bool,
}

impl FsckStatus {
    pub fn from_exit_code(code: i32) -> Self {
        Self {
            errors_corrected: code & FSCK_NONDESTRUCT != 0,
            reboot_required: code & FSCK_REBOOT != 0,
            errors_uncorrected: code & FSCK_UNCORRECTED != 0,
            operational_error: code & FSCK_ERROR != 0,
            usage_error: code & FSCK_USAGE != 0,
            cancelled: code & FSCK_CANCELED != 0,
        }
    }

    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// fsck ran to completion and left no known problems behind.
    pub fn is_success(&self) -> bool {
        !(self.errors_uncorrected || self.operational_error || self.usage_error || self.cancelled)
    }
}

/// Result of a completed check or repair run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsckReport {
    pub device: String,
    pub mode: FsckMode,
    pub status: FsckStatus,
    pub exit_code: i32,
    /// Full output from fsck.ocfs2
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_exit_bits() {
        assert!(FsckStatus::from_exit_code(0).is_clean());

        let corrected = FsckStatus::from_exit_code(1);
        assert!(corrected.errors_corrected);
        assert!(corrected.is_success());

        let left = FsckStatus::from_exit_code(4);
        assert!(left.errors_uncorrected);
        assert!(!left.is_success());

        let mixed = FsckStatus::from_exit_code(FSCK_NONDESTRUCT | FSCK_REBOOT);
        assert!(mixed.reboot_required);
        assert!(mixed.is_success());

        assert!(!FsckStatus::from_exit_code(8).is_success());
        assert!(!FsckStatus::from_exit_code(32).is_success());
    }

    #[test]
    fn mode_flags() {
        assert_eq!(FsckMode::from_check_flag(true), FsckMode::Check);
        assert_eq!(FsckMode::Check.flag(), "-n");
        assert_eq!(FsckMode::from_check_flag(false).flag(), "-y");
    }
}
