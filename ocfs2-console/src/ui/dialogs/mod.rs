// SPDX-License-Identifier: GPL-3.0-only

pub(crate) mod message;
pub(crate) mod state;
pub(crate) mod view;
