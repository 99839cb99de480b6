// SPDX-License-Identifier: GPL-3.0-only

//! System layer of the OCFS2 console
//!
//! Everything that touches the running system lives here:
//! - Running external tools ([`ProcessRunner`], [`SystemRunner`])
//! - Building their command lines ([`commands`])
//! - Enumerating partitions from /proc and blkid ([`partitions`], [`mounts`])
//! - Querying volume details and free space ([`volume`])
//! - Parsing the cluster node listing ([`nodes`])
//! - Listing directories of mounted volumes ([`browse`])
//! - Detecting which OCFS2 tools are installed ([`tools`])
//!
//! Mutating operations need root; the console is expected to run as root.

pub mod browse;
pub mod commands;
pub mod error;
pub mod mounts;
pub mod nodes;
pub mod partitions;
pub mod process;
pub mod tools;
pub mod volume;

pub use error::{Result, SysError};
pub use partitions::{PartitionSource, SystemPartitionSource};
pub use process::{ProcessRunner, SystemRunner};
