// SPDX-License-Identifier: GPL-3.0-only

//! Partition list filter
//!
//! Plain text matches anywhere in the device path. Text with glob
//! metacharacters is a glob tried against the full path and the base name.

use std::path::Path;

use globset::{Glob, GlobMatcher};

const GLOB_METACHARACTERS: &[char] = &['*', '?', '[', '{'];

#[derive(Debug, Clone)]
pub struct PartitionFilter {
    text: String,
    glob: Option<GlobMatcher>,
}

impl PartitionFilter {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();

        let glob = if text.contains(GLOB_METACHARACTERS) {
            match Glob::new(&text) {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(e) => {
                    tracing::debug!(%e, pattern = %text, "invalid filter glob, matching as text");
                    None
                }
            }
        } else {
            None
        };

        Self { text, glob }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn matches(&self, device: &str) -> bool {
        if self.text.is_empty() {
            return true;
        }

        match &self.glob {
            Some(glob) => {
                let path = Path::new(device);
                glob.is_match(path) || path.file_name().is_some_and(|name| glob.is_match(name))
            }
            None => device.contains(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matches_everything() {
        let filter = PartitionFilter::new("  ");
        assert!(filter.is_empty());
        assert!(filter.matches("/dev/sda1"));
    }

    #[test]
    fn plain_text_is_substring() {
        let filter = PartitionFilter::new("sdb");
        assert!(filter.matches("/dev/sdb1"));
        assert!(!filter.matches("/dev/sda1"));
    }

    #[test]
    fn glob_matches_base_name_or_path() {
        let filter = PartitionFilter::new("sd?1");
        assert!(filter.matches("/dev/sdb1"));
        assert!(!filter.matches("/dev/sdb2"));

        let filter = PartitionFilter::new("/dev/mapper/*");
        assert!(filter.matches("/dev/mapper/vg-shared"));
        assert!(!filter.matches("/dev/sdb1"));
    }

    #[test]
    fn invalid_glob_falls_back_to_text() {
        let filter = PartitionFilter::new("sd[");
        assert!(filter.matches("/dev/sd[weird"));
        assert!(!filter.matches("/dev/sda"));
    }
}
