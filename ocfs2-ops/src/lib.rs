// SPDX-License-Identifier: GPL-3.0-only

//! Action dispatchers for the OCFS2 console
//!
//! Every user-facing operation is split in two:
//! - a pure `prepare_*` function that validates input and builds the
//!   [`ProcessRequest`](ocfs2_types::ProcessRequest), so the front end knows
//!   what it is about to run
//! - an async dispatcher that runs it through the [`Services`] runner and
//!   maps the [`ProcessOutcome`](ocfs2_types::ProcessOutcome) onto
//!   [`ActionError`]
//!
//! [`ConsoleContext`] owns the services and the partition list state.

pub mod actions;
pub mod cluster;
pub mod context;
pub mod error;
pub mod filter;
pub mod format;
pub mod fsck;
pub mod info;
pub mod mount;
pub mod tune;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::{ACTIONS, ActionId, ActionSpec, MenuGroup, Requirement};
pub use context::{ConsoleContext, ConsoleState, InFlight, Services, scan};
pub use error::{ActionError, ActionOutcome, Severity};
pub use filter::PartitionFilter;
