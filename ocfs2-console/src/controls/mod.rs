// SPDX-License-Identifier: GPL-3.0-only

pub(crate) mod actions;
pub(crate) mod fields;
