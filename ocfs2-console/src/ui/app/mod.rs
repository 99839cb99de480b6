// SPDX-License-Identifier: GPL-3.0-only

pub(crate) mod message;
pub(crate) mod state;
pub(crate) mod subscriptions;
pub(crate) mod update;
pub(crate) mod view;

pub(crate) use message::Message;
use state::{AppModel, ContextPage};

use crate::config::Config;
use crate::ui::app::state::PaneState;
use cosmic::app::{Core, Task};
use cosmic::widget::menu;
use cosmic::{Application, Element};
use ocfs2_ops::{ConsoleContext, Services};
use std::collections::HashMap;

pub(crate) const APP_ID: &str = "org.ocfs2.Console";

/// Create a COSMIC application from the app model.
impl Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(core: Core, _flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let config = Config::load(Self::APP_ID);

        let mut ctx = ConsoleContext::new(Services::system());
        ctx.state.filter = config.last_filter.clone();

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            key_binds: HashMap::<menu::KeyBind, crate::views::menu::MenuAction>::new(),
            filter_input: config.last_filter.clone(),
            config,
            ctx,
            dialog: None,
            busy: None,
            panes: PaneState::default(),
            tools: ocfs2_sys::tools::detect_tools(),
        };

        for tool in app.tools.iter().filter(|tool| !tool.available) {
            tracing::warn!(command = tool.command, package = tool.package_hint, "tool not found");
        }

        // Create a startup command that sets the window title.
        let command = app.update_title();
        let refresh = update::refresh(&mut app);
        let nodes = update::panes::load_nodes(&mut app);

        (app, command.chain(refresh).chain(nodes))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        view::header_start(self)
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        view::header_end(self)
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        view::dialog(self)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(
        &self,
    ) -> Option<cosmic::app::context_drawer::ContextDrawer<'_, Self::Message>> {
        view::context_drawer(self)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        view::view(self)
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        subscriptions::subscription(self)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        update::update(self, message)
    }

    /// The window closes even with a command in flight; the child keeps running.
    fn on_close_requested(&self, _id: cosmic::iced::window::Id) -> Option<Self::Message> {
        if let Some(op) = &self.ctx.state.in_flight {
            tracing::warn!(
                operation = %op.id,
                command = %op.request.command,
                "closing while a command is still running"
            );
        }
        None
    }
}
