// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::Config;
use crate::fl;
use crate::ui::app::message::Message;
use crate::ui::dialogs::state::ShowDialog;
use crate::views::menu::MenuAction;
use cosmic::ApplicationExt;
use cosmic::app::{Core, Task};
use cosmic::widget::menu;
use ocfs2_ops::ConsoleContext;
use ocfs2_sys::tools::ToolInfo;
use ocfs2_types::{ClusterNode, DirEntry, MountState, OperationId, VolumeInfo};

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    Settings,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PaneTab {
    #[default]
    General,
    Files,
    Nodes,
}

/// Loading state of one info pane
#[derive(Debug, Clone, Default)]
pub enum Load<T> {
    #[default]
    Empty,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct PaneState {
    pub tab: PaneTab,
    pub general: Load<VolumeInfo>,
    /// Directory shown by the File Listing pane, relative to the mountpoint
    pub files_dir: PathBuf,
    pub files: Load<Vec<DirEntry>>,
    pub nodes: Load<Vec<ClusterNode>>,
}

/// Modal shown while a mutating command runs.
///
/// Created hidden when the command starts; `visible` flips once the
/// request's spin delay has passed.
#[derive(Debug, Clone)]
pub struct BusyIndicator {
    pub id: OperationId,
    pub title: String,
    pub message: String,
    pub command: String,
    pub visible: bool,
    /// Position of the sweeping progress bar, in `0.0..=2.0`
    pub pulse: f32,
}

impl BusyIndicator {
    pub const PULSE_STEP: f32 = 0.04;

    /// Fill fraction of the progress bar: grows to full then shrinks back.
    pub fn fraction(&self) -> f32 {
        if self.pulse <= 1.0 {
            self.pulse
        } else {
            2.0 - self.pulse
        }
    }

    pub fn advance(&mut self) {
        self.pulse = (self.pulse + Self::PULSE_STEP) % 2.0;
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub(crate) core: Core,
    /// Display a context drawer with the designated page if defined.
    pub(crate) context_page: ContextPage,
    /// Key bindings for the application's menu bar.
    pub(crate) key_binds: HashMap<menu::KeyBind, MenuAction>,
    // Configuration data that persists between application runs.
    pub(crate) config: Config,
    /// Services plus the partition list
    pub(crate) ctx: ConsoleContext,
    /// Filter entry text; only applied on submit
    pub(crate) filter_input: String,
    pub(crate) dialog: Option<ShowDialog>,
    pub(crate) busy: Option<BusyIndicator>,
    pub(crate) panes: PaneState,
    pub(crate) tools: Vec<ToolInfo>,
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<Message> {
        let mut window_title = fl!("app-title");

        if let Some(device) = self.ctx.state.selected.as_deref() {
            window_title.push_str(" - ");
            window_title.push_str(device);
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    pub(crate) fn selection_state(&self) -> Option<MountState> {
        self.ctx
            .state
            .selected_partition()
            .map(|partition| partition.mount_state())
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.ctx.state.is_busy()
    }

    pub(crate) fn tool_available(&self, command: &str) -> bool {
        self.tools
            .iter()
            .find(|tool| tool.command == command)
            .is_none_or(|tool| tool.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator() -> BusyIndicator {
        BusyIndicator {
            id: OperationId::new(),
            title: "Format".to_string(),
            message: "Formatting...".to_string(),
            command: "mkfs.ocfs2 /dev/sdb1".to_string(),
            visible: true,
            pulse: 0.0,
        }
    }

    #[test]
    fn busy_bar_sweeps_up_and_back() {
        let mut busy = indicator();
        let steps = (1.0 / BusyIndicator::PULSE_STEP).round() as usize;

        for _ in 0..steps {
            busy.advance();
        }
        assert!((busy.fraction() - 1.0).abs() < 0.01);

        for _ in 0..steps {
            busy.advance();
        }
        assert!(busy.fraction() < 0.01);
        assert!((0.0..=1.0).contains(&busy.fraction()));
    }
}
