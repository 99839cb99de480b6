// SPDX-License-Identifier: GPL-3.0-only

//! Shared domain types for the OCFS2 console
//!
//! These types flow between the system layer (`ocfs2-sys`), the action
//! dispatchers (`ocfs2-ops`) and the GUI (`ocfs2-console`):
//!
//! - [`CommandLine`] / [`ProcessRequest`] / [`ProcessOutcome`] describe one
//!   external tool invocation and its result
//! - [`Partition`] / [`Selection`] describe what the partition list shows
//! - [`VolumeInfo`], [`FormatOptions`], [`FsckReport`], [`ClusterNode`] and
//!   [`DirEntry`] back the dialogs and info panes

pub mod browse;
pub mod command;
pub mod common;
pub mod format;
pub mod fsck;
pub mod id;
pub mod nodes;
pub mod partition;
pub mod process;
pub mod volume;

pub use browse::*;
pub use command::*;
pub use common::*;
pub use format::*;
pub use fsck::*;
pub use id::*;
pub use nodes::*;
pub use partition::*;
pub use process::*;
pub use volume::*;
