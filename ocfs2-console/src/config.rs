// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use ocfs2_types::DEFAULT_NODE_SLOTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            4 => Self::Trace,
            _ => Self::Info,
        }
    }

    pub fn to_index(self) -> usize {
        match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        }
    }

    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub log_to_disk: bool,
    pub log_level: LoggingLevel,
    /// Partition filter restored at startup
    pub last_filter: String,
    /// Prefilled in the mount prompt
    pub default_mountpoint: String,
    pub default_node_slots: u16,
    /// Bytes; 0 lets mkfs.ocfs2 decide
    pub default_cluster_size: u32,
    /// Bytes; 0 lets mkfs.ocfs2 decide
    pub default_block_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_to_disk: true,
            log_level: LoggingLevel::Info,
            last_filter: String::new(),
            default_mountpoint: String::new(),
            default_node_slots: DEFAULT_NODE_SLOTS,
            default_cluster_size: 0,
            default_block_size: 0,
        }
    }
}

impl Config {
    pub fn load(app_id: &str) -> Self {
        cosmic_config::Config::new(app_id, Config::VERSION)
            .map(|context| match Self::get_entry(&context) {
                Ok(config) => config,
                Err((_errors, config)) => config,
            })
            .unwrap_or_default()
    }

    /// Writes the whole entry back; failures are logged and otherwise ignored.
    pub fn persist(&self, app_id: &str) {
        match cosmic_config::Config::new(app_id, Config::VERSION) {
            Ok(helper) => {
                if let Err(e) = self.write_entry(&helper) {
                    tracing::warn!(?e, "failed to save configuration");
                }
            }
            Err(e) => tracing::warn!(?e, "failed to open configuration"),
        }
    }
}
