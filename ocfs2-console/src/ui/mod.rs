// SPDX-License-Identifier: GPL-3.0-only

pub(crate) mod app;
pub(crate) mod dialogs;
pub(crate) mod error;
