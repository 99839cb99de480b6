// SPDX-License-Identifier: GPL-3.0-only

//! Directory listing for mounted volumes

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};
use ocfs2_types::{DirEntry, EntryKind, sort_entries};

use crate::{Result, SysError};

/// Joins `relative` onto `root`, refusing anything that would leave `root`.
pub fn resolve_within(root: &Path, relative: &Path) -> Result<PathBuf> {
    let mut resolved = root.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => {
                return Err(SysError::OutsideRoot(relative.display().to_string()));
            }
        }
    }

    Ok(resolved)
}

/// Lists `relative` under the mounted volume at `root`, directories first.
pub async fn list_directory(root: &Path, relative: &Path) -> Result<Vec<DirEntry>> {
    let dir = resolve_within(root, relative)?;
    let mut reader = tokio::fs::read_dir(&dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();

        let metadata = match tokio::fs::symlink_metadata(entry.path()).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(%e, name = %name, "skipping unreadable entry");
                continue;
            }
        };

        let file_type = metadata.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        entries.push(DirEntry {
            name,
            kind,
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}
