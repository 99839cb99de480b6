// SPDX-License-Identifier: GPL-3.0-only

pub(crate) mod menu;
pub(crate) mod panes;
pub(crate) mod partitions;
pub(crate) mod settings;
