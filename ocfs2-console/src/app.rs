// SPDX-License-Identifier: GPL-3.0-only

pub(crate) use crate::ui::app::message::Message;
pub(crate) use crate::ui::app::state::AppModel;
