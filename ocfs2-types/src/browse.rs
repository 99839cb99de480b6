// SPDX-License-Identifier: GPL-3.0-only

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// One row of the File Listing tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Directories first, then everything else, each group by name.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|left, right| {
        right
            .is_dir()
            .cmp(&left.is_dir())
            .then_with(|| left.name.cmp(&right.name))
    });
}
